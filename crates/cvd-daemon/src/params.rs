//! Query-string parsing. String flags become typed values here so nothing
//! past the handlers deals with `"true"`/`"false"` words.

use cvd_config::TableDay;
use cvd_historical::LastDays;
use serde::Deserialize;

/// `"true"` or `"1"` is true; anything else, including absence, is false.
pub fn word_to_bool(word: Option<&str>) -> bool {
    matches!(word.map(str::trim), Some("true") | Some("1"))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalParams {
    pub lastdays: Option<String>,
}

impl HistoricalParams {
    pub fn lastdays(&self) -> LastDays {
        LastDays::parse(self.lastdays.as_deref())
    }
}

/// Flags shared by the worldometers endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParams {
    pub yesterday: Option<String>,
    pub two_days_ago: Option<String>,
    pub allow_null: Option<String>,
    pub strict: Option<String>,
    pub sort: Option<String>,
}

impl TableParams {
    pub fn day(&self) -> TableDay {
        TableDay::from_flags(
            word_to_bool(self.yesterday.as_deref()),
            word_to_bool(self.two_days_ago.as_deref()),
        )
    }

    pub fn allow_null(&self) -> bool {
        word_to_bool(self.allow_null.as_deref())
    }

    /// Strict matching unless explicitly `strict=false`.
    pub fn strict(&self) -> bool {
        self.strict.as_deref() != Some("false")
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_to_bool_accepts_true_and_one() {
        assert!(word_to_bool(Some("true")));
        assert!(word_to_bool(Some("1")));
        assert!(!word_to_bool(Some("false")));
        assert!(!word_to_bool(Some("yes")));
        assert!(!word_to_bool(None));
    }

    #[test]
    fn yesterday_wins_over_two_days_ago() {
        let p = TableParams {
            yesterday: Some("true".into()),
            two_days_ago: Some("true".into()),
            ..Default::default()
        };
        assert_eq!(p.day(), TableDay::Yesterday);

        let p = TableParams {
            two_days_ago: Some("1".into()),
            ..Default::default()
        };
        assert_eq!(p.day(), TableDay::TwoDaysAgo);
        assert_eq!(TableParams::default().day(), TableDay::Today);
    }

    #[test]
    fn strict_defaults_on() {
        assert!(TableParams::default().strict());
        let p = TableParams {
            strict: Some("false".into()),
            ..Default::default()
        };
        assert!(!p.strict());
    }

    #[test]
    fn lastdays_parses_through() {
        let p = HistoricalParams {
            lastdays: Some("all".into()),
        };
        assert_eq!(p.lastdays(), LastDays::All);
        assert_eq!(HistoricalParams::default().lastdays(), LastDays::Count(30));
    }
}
