//! Wire/persistence types shared by every cvd crate.
//!
//! Everything here is a plain serde type. Field names follow the public JSON
//! shape served by the API (`countryInfo`, `updatedAt`, ...), not Rust naming.

mod series;

pub use series::DateSeries;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Historical snapshot
// ---------------------------------------------------------------------------

/// Canonical identity of a country as returned by the country resolver.
///
/// An unresolved label is represented by the empty value, which serializes
/// as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl CountryInfo {
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// True when the resolver recognised the label.
    pub fn is_resolved(&self) -> bool {
        self.country.is_some()
    }

    /// iso2, iso3 and id all agree.
    pub fn same_identity(&self, other: &CountryInfo) -> bool {
        self.iso2 == other.iso2 && self.iso3 == other.iso3 && self.id == other.id
    }
}

/// The three per-metric series of one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub cases: DateSeries,
    pub deaths: DateSeries,
    pub recovered: DateSeries,
}

/// One persisted location of the historical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub country: String,
    #[serde(rename = "countryInfo", default)]
    pub country_info: CountryInfo,
    /// Lowercased province label; `None` for the country's mainland row.
    pub province: Option<String>,
    pub timeline: Timeline,
}

/// A location as served by `GET /historical` (identity stripped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHistory {
    pub country: String,
    pub province: Option<String>,
    pub timeline: Timeline,
}

/// Province field of a country query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProvinceSelection {
    /// A specific province was requested.
    Single(String),
    /// Every matched location, `"mainland"` standing in for null.
    All(Vec<String>),
}

/// Summed history for a country (optionally narrowed to one province).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryHistory {
    pub country: String,
    pub province: ProvinceSelection,
    pub timeline: Timeline,
}

// ---------------------------------------------------------------------------
// JHU daily report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JhuStats {
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// One row of the JHU CSSE daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JhuLocation {
    pub country: String,
    pub province: Option<String>,
    /// Only populated for US rows.
    pub county: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub stats: JhuStats,
    pub coordinates: Coordinates,
}

// ---------------------------------------------------------------------------
// Worldometers tables
// ---------------------------------------------------------------------------

/// A country or continent row of the worldometers tables.
///
/// Only the identity fields are typed; every statistic is carried through
/// untouched in `stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldometersRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Passed through verbatim (it carries flag/lat/long besides the iso codes).
    #[serde(rename = "countryInfo", default, skip_serializing_if = "Option::is_none")]
    pub country_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}
