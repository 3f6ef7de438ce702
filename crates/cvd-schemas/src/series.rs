//! Insertion-ordered `date label -> count` mapping.
//!
//! Date labels are opaque (`"1/22/20"`); their order is the order in which the
//! upstream CSV lists them. serde_json's default object type sorts keys, so the
//! series carries its own map (de)serialization to keep source order on the wire
//! and through the cache.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSeries {
    entries: Vec<(String, i64)>,
}

impl DateSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry. Callers are responsible for label uniqueness.
    pub fn push(&mut self, date: impl Into<String>, value: i64) {
        self.entries.push((date.into(), value));
    }

    pub fn get(&self, date: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(d, v)| (d.as_str(), *v))
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    /// The last `n` entries by position (all of them when `n >= len`).
    pub fn tail(&self, n: usize) -> &[(String, i64)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn as_slice(&self) -> &[(String, i64)] {
        &self.entries
    }
}

impl From<Vec<(String, i64)>> for DateSeries {
    fn from(entries: Vec<(String, i64)>) -> Self {
        Self { entries }
    }
}

impl<'a> From<&'a [(String, i64)]> for DateSeries {
    fn from(entries: &'a [(String, i64)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }
}

impl FromIterator<(String, i64)> for DateSeries {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DateSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, value) in &self.entries {
            map.serialize_entry(date, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DateSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SeriesVisitor)
    }
}

struct SeriesVisitor;

impl<'de> Visitor<'de> for SeriesVisitor {
    type Value = DateSeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of date label -> integer count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut series = DateSeries::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((date, value)) = access.next_entry::<String, i64>()? {
            series.push(date, value);
        }
        Ok(series)
    }
}
