//! Fixed cache keys.
//!
//! Every cache read and write goes through this enum so a typo is a compile
//! error instead of a silently empty read.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheKey {
    /// Full historical snapshot (JSON array of `LocationSnapshot`).
    Historical,
    /// JHU CSSE daily report rows.
    JhuLocations,
    Countries,
    YesterdayCountries,
    TwoDaysAgoCountries,
    Continents,
    YesterdayContinents,
    TwoDaysAgoContinents,
}

impl CacheKey {
    pub const ALL: [CacheKey; 8] = [
        CacheKey::Historical,
        CacheKey::JhuLocations,
        CacheKey::Countries,
        CacheKey::YesterdayCountries,
        CacheKey::TwoDaysAgoCountries,
        CacheKey::Continents,
        CacheKey::YesterdayContinents,
        CacheKey::TwoDaysAgoContinents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::Historical => "historical_v2",
            CacheKey::JhuLocations => "jhu_v2",
            CacheKey::Countries => "countries",
            CacheKey::YesterdayCountries => "yesterday_countries",
            CacheKey::TwoDaysAgoCountries => "twoDaysAgo_countries",
            CacheKey::Continents => "continents",
            CacheKey::YesterdayContinents => "yesterday_continents",
            CacheKey::TwoDaysAgoContinents => "twoDaysAgo_continents",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which day a worldometers table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableDay {
    #[default]
    Today,
    Yesterday,
    TwoDaysAgo,
}

impl TableDay {
    /// `yesterday` wins over `two_days_ago` when both are set.
    pub fn from_flags(yesterday: bool, two_days_ago: bool) -> Self {
        if yesterday {
            TableDay::Yesterday
        } else if two_days_ago {
            TableDay::TwoDaysAgo
        } else {
            TableDay::Today
        }
    }

    pub fn countries_key(self) -> CacheKey {
        match self {
            TableDay::Today => CacheKey::Countries,
            TableDay::Yesterday => CacheKey::YesterdayCountries,
            TableDay::TwoDaysAgo => CacheKey::TwoDaysAgoCountries,
        }
    }

    pub fn continents_key(self) -> CacheKey {
        match self {
            TableDay::Today => CacheKey::Continents,
            TableDay::Yesterday => CacheKey::YesterdayContinents,
            TableDay::TwoDaysAgo => CacheKey::TwoDaysAgoContinents,
        }
    }
}
