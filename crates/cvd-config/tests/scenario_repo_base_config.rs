//! The checked-in base config must decode to exactly the built-in defaults and
//! carry no keys the service ignores.

use cvd_config::{load_layered_yaml, report_unused_keys, ServiceConfig, UnusedKeyPolicy};

fn base_yaml_path() -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../config/defaults/base.yaml")
        .to_string_lossy()
        .to_string()
}

#[test]
fn base_yaml_matches_defaults() {
    let path = base_yaml_path();
    let loaded = load_layered_yaml(&[path.as_str()]).unwrap();
    let cfg = ServiceConfig::from_loaded(&loaded).unwrap();
    assert_eq!(cfg, ServiceConfig::default());
}

#[test]
fn base_yaml_has_no_unused_keys() {
    let path = base_yaml_path();
    let loaded = load_layered_yaml(&[path.as_str()]).unwrap();
    let unused = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap();
    assert!(unused.is_empty());
}
