//! Service configuration.
//!
//! Configuration is built in three steps:
//! 1. Zero or more YAML documents are merged in order (later documents override
//!    earlier ones) and hashed, so the effective config can be logged by hash.
//! 2. The merged JSON is decoded into [`ServiceConfig`]; every field has a default,
//!    so an empty document set yields a runnable config.
//! 3. A small set of environment variables override individual fields
//!    (see [`ServiceConfig::apply_env_overrides`]).
//!
//! Cache keys are not configurable; they live in [`CacheKey`].

mod keys;

pub use keys::{CacheKey, TableDay};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

/// Env var holding comma-separated YAML config paths.
pub const ENV_CONFIG_PATHS: &str = "CVD_CONFIG";

const DEFAULT_HISTORICAL_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/";
const DEFAULT_JHU_DAILY_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_daily_reports/";
const DEFAULT_WORLDOMETERS_URL: &str = "https://www.worldometers.info/coronavirus/";

/// Secret-looking prefixes that must never appear as literal config values.
/// Config may name env vars; it may not hold credentials.
const SECRET_PREFIXES: &[&str] = &[
    "sk-",
    "sk_live",
    "AKIA",
    "-----BEGIN",
    "ghp_",
    "glpat-",
    "xoxb-",
];

/// Top-level sections this crate reads. Anything else in a YAML layer is
/// reported by [`report_unused_keys`].
const CONSUMED_SECTIONS: &[&str] = &["/server", "/scraper", "/sources"];

// ---------------------------------------------------------------------------
// Typed config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Milliseconds between scrape cycles.
    pub interval_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            interval_ms: 600_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory holding `time_series_covid19_{confirmed,deaths,recovered}_global.csv`.
    pub historical_base_url: String,
    /// Directory holding `MM-DD-YYYY.csv` daily reports.
    pub jhu_daily_base_url: String,
    /// Page holding the today / yesterday / two-days-ago country tables.
    pub worldometers_url: String,
    /// Per-request timeout for upstream fetches.
    pub timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            historical_base_url: DEFAULT_HISTORICAL_BASE_URL.to_string(),
            jhu_daily_base_url: DEFAULT_JHU_DAILY_BASE_URL.to_string(),
            worldometers_url: DEFAULT_WORLDOMETERS_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SourcesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub scraper: ScraperConfig,
    pub sources: SourcesConfig,
}

impl ServiceConfig {
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let cfg: Self = serde_json::from_value(loaded.config_json.clone())
            .context("config does not match the service config schema")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Value checks the schema cannot express. Run after every change source.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.interval_ms == 0 {
            bail!("scraper.interval_ms must be greater than zero");
        }
        if self.sources.timeout_secs == 0 {
            bail!("sources.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Load YAML layers named by `CVD_CONFIG` (if set), then apply env overrides.
    ///
    /// Returns the loaded layer set alongside so callers can log the hash.
    pub fn from_env() -> Result<(Self, LoadedConfig)> {
        let paths = std::env::var(ENV_CONFIG_PATHS).unwrap_or_default();
        let paths: Vec<&str> = paths
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let loaded = load_layered_yaml(&paths)?;
        let mut cfg = Self::from_loaded(&loaded)?;
        cfg.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok((cfg, loaded))
    }

    /// Apply environment overrides through `lookup` (injected for tests).
    ///
    /// - `CVD_ADDR`: full bind address.
    /// - `SERVER_PORT`: port only; keeps the configured host.
    /// - `INTERVAL`: scrape interval in milliseconds.
    ///
    /// Blank values are ignored; unparseable values are errors naming the variable.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(addr) = read("CVD_ADDR") {
            addr.parse::<SocketAddr>()
                .with_context(|| format!("CVD_ADDR is not a socket address: {addr}"))?;
            self.server.addr = addr;
        }

        if let Some(port) = read("SERVER_PORT") {
            let port: u16 = port
                .parse()
                .with_context(|| format!("SERVER_PORT is not a port number: {port}"))?;
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.addr = addr.to_string();
        }

        if let Some(interval) = read("INTERVAL") {
            let ms: u64 = interval
                .parse()
                .with_context(|| format!("INTERVAL is not a millisecond count: {interval}"))?;
            if ms == 0 {
                bail!("INTERVAL must be greater than zero");
            }
            self.scraper.interval_ms = ms;
        }

        self.validate()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .addr
            .parse()
            .with_context(|| format!("server.addr is not a socket address: {}", self.server.addr))
    }

    pub fn scrape_interval(&self) -> Duration {
        Duration::from_millis(self.scraper.interval_ms)
    }
}

// ---------------------------------------------------------------------------
// Layered YAML loading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::with_capacity(paths.len());
    for p in paths {
        let raw = fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }
    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        // An empty document parses as null; treat it as "no overrides".
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    enforce_no_secret_literals(&merged)?;

    // serde_json::Map is key-sorted, so this string is independent of YAML key order.
    let canonical_json = serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (k, v) in overlay_map {
                let prev = base_map.remove(&k).unwrap_or(Value::Null);
                base_map.insert(k, deep_merge(prev, v));
            }
            Value::Object(base_map)
        }
        (_, other) => other,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn enforce_no_secret_literals(v: &Value) -> Result<()> {
    let mut leaves = Vec::new();
    collect_leaf_pointers(v, "", &mut leaves);

    for ptr in leaves {
        let Some(s) = v.pointer(&ptr).and_then(Value::as_str) else {
            continue;
        };
        let t = s.trim();
        if t.len() >= 8 && SECRET_PREFIXES.iter().any(|p| t.starts_with(p)) {
            bail!("CONFIG_SECRET_DETECTED leaf={} value=REDACTED", ptr);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unused-key report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

/// Leaf pointers present in the merged config but outside every section the
/// service reads (typically a misspelt section name).
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<Vec<String>> {
    let mut leaves = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|leaf| leaf != "/")
        .filter(|leaf| !CONSUMED_SECTIONS.iter().any(|p| is_prefix_pointer(p, leaf)))
        .collect();
    unused.sort();
    unused.dedup();

    if policy == UnusedKeyPolicy::Fail && !unused.is_empty() {
        bail!(
            "CONFIG_UNUSED_KEYS: {} unused config leaf key(s): {:?}",
            unused.len(),
            unused
        );
    }
    Ok(unused)
}

/// "/a/b" is a prefix of "/a/b" and "/a/b/c" but not of "/a/bc".
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    match leaf.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map {
                let token = k.replace('~', "~0").replace('/', "~1");
                collect_leaf_pointers(vv, &format!("{prefix}/{token}"), out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                collect_leaf_pointers(vv, &format!("{prefix}/{i}"), out);
            }
        }
        _ => out.push(if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        }),
    }
}
