//! Country identity resolution.
//!
//! Maps a free-form label (`"US"`, `"usa"`, `"Korea, South"`, `"840"`) to the
//! canonical `{country, iso2, iso3, id}` identity. Unknown labels resolve to the
//! empty identity rather than an error; callers fall back to the raw label.

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

use cvd_schemas::CountryInfo;

use crate::text::words_standardize;

/// Label -> canonical identity lookup.
pub trait CountryResolver: Send + Sync {
    fn resolve(&self, label: &str) -> CountryInfo;
}

/// One row of the static country table.
#[derive(Debug, Clone, Copy)]
pub struct CountryRecord {
    pub country: &'static str,
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub id: Option<u32>,
    /// Alternative spellings, including the labels used by the JHU feeds.
    pub aliases: &'static [&'static str],
}

impl CountryRecord {
    const fn new(
        country: &'static str,
        iso2: &'static str,
        iso3: &'static str,
        id: Option<u32>,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            country,
            iso2,
            iso3,
            id,
            aliases,
        }
    }

    fn info(&self) -> CountryInfo {
        CountryInfo {
            country: Some(self.country.to_string()),
            iso2: Some(self.iso2.to_string()),
            iso3: Some(self.iso3.to_string()),
            id: self.id,
        }
    }
}

/// Indexed country table.
#[derive(Debug, Clone)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
    by_name: HashMap<String, usize>,
    by_iso2: HashMap<&'static str, usize>,
    by_iso3: HashMap<&'static str, usize>,
    by_id: HashMap<u32, usize>,
}

impl CountryTable {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_iso2 = HashMap::new();
        let mut by_iso3 = HashMap::new();
        let mut by_id = HashMap::new();

        for (i, r) in records.iter().enumerate() {
            // First record wins on collisions.
            by_name.entry(words_standardize(r.country)).or_insert(i);
            for alias in r.aliases {
                by_name.entry(words_standardize(alias)).or_insert(i);
            }
            by_iso2.entry(r.iso2).or_insert(i);
            by_iso3.entry(r.iso3).or_insert(i);
            if let Some(id) = r.id {
                by_id.entry(id).or_insert(i);
            }
        }

        Self {
            records,
            by_name,
            by_iso2,
            by_iso3,
            by_id,
        }
    }

    /// The built-in table, built once per process.
    pub fn embedded() -> &'static CountryTable {
        static TABLE: OnceLock<CountryTable> = OnceLock::new();
        TABLE.get_or_init(|| CountryTable::new(data::COUNTRIES.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, label: &str) -> Option<&CountryRecord> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let upper = label.to_ascii_uppercase();
        let idx = match upper.len() {
            2 => self.by_iso2.get(upper.as_str()).copied(),
            3 => self.by_iso3.get(upper.as_str()).copied(),
            _ => None,
        }
        .or_else(|| label.parse::<u32>().ok().and_then(|id| self.by_id.get(&id).copied()))
        .or_else(|| self.by_name.get(&words_standardize(label)).copied())?;

        self.records.get(idx)
    }
}

impl CountryResolver for CountryTable {
    fn resolve(&self, label: &str) -> CountryInfo {
        self.lookup(label)
            .map(CountryRecord::info)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static CountryTable {
        CountryTable::embedded()
    }

    #[test]
    fn embedded_table_is_populated() {
        assert!(table().len() > 150);
    }

    #[test]
    fn iso_codes_are_unique() {
        let t = table();
        assert_eq!(t.by_iso2.len(), t.len());
        assert_eq!(t.by_iso3.len(), t.len());
    }

    #[test]
    fn resolves_by_iso_codes_case_insensitive() {
        let t = table();
        assert_eq!(t.resolve("US").country.as_deref(), Some("USA"));
        assert_eq!(t.resolve("usa").iso2.as_deref(), Some("US"));
        assert_eq!(t.resolve("ita").country.as_deref(), Some("Italy"));
    }

    #[test]
    fn resolves_by_numeric_id() {
        assert_eq!(table().resolve("380").country.as_deref(), Some("Italy"));
    }

    #[test]
    fn resolves_jhu_labels_through_aliases() {
        let t = table();
        assert_eq!(t.resolve("Korea, South").country.as_deref(), Some("S. Korea"));
        assert_eq!(t.resolve("Taiwan").iso3.as_deref(), Some("TWN"));
        assert_eq!(t.resolve("Congo (Kinshasa)").iso2.as_deref(), Some("CD"));
        assert_eq!(t.resolve("Burma").country.as_deref(), Some("Myanmar"));
    }

    #[test]
    fn resolves_full_names_loosely() {
        let info = table().resolve("united states of america");
        assert_eq!(info.id, Some(840));
    }

    #[test]
    fn unknown_label_is_unresolved() {
        let t = table();
        assert!(!t.resolve("Diamond Princess").is_resolved());
        assert!(!t.resolve("").is_resolved());
        assert_eq!(t.resolve("Atlantis"), CountryInfo::default());
    }

    #[test]
    fn resolver_is_object_safe() {
        let r: &dyn CountryResolver = table();
        assert!(r.resolve("FR").is_resolved());
    }
}
