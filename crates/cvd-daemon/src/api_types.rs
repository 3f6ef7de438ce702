//! Response types shared by the cvd-daemon handlers.
//!
//! No business logic lives here.

use cvd_schemas::JhuLocation;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// `{ "message": ... }` body of 404 / 503 answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub const DATA_NOT_AVAILABLE: &str = "Data not available yet";
pub const COUNTRY_NOT_FOUND: &str = "Country not found or doesn't have any cases";
pub const CONTINENT_NOT_FOUND: &str = "Continent not found or doesn't have any cases";
pub const COUNTY_NOT_FOUND: &str = "County not found";

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// A single match answers as an object, several as an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// `None` for an empty list.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(items)),
        }
    }
}

/// `/jhucsse/counties/a,b`: an object keyed by the requested county name,
/// in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountyGroups(pub Vec<(String, Vec<JhuLocation>)>);

impl Serialize for CountyGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (county, rows) in &self.0 {
            map.serialize_entry(county, rows)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CountiesResponse {
    List(Vec<JhuLocation>),
    Grouped(CountyGroups),
}
