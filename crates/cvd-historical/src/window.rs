//! Trailing date window (`?lastdays=`).

use cvd_schemas::DateSeries;

pub const DEFAULT_LAST_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastDays {
    /// `lastdays=all`: keep the whole series.
    All,
    /// Keep the last `n` entries by position.
    Count(usize),
}

impl Default for LastDays {
    fn default() -> Self {
        LastDays::Count(DEFAULT_LAST_DAYS)
    }
}

impl LastDays {
    /// `"all"` (any case) keeps everything; a positive integer keeps that many
    /// entries; absent, zero, negative or non-numeric input falls back to 30.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::default();
        };
        if raw.eq_ignore_ascii_case("all") {
            return LastDays::All;
        }
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => LastDays::Count(n),
            _ => Self::default(),
        }
    }

    /// The entries of `series` inside the window, in source order.
    pub fn apply<'a>(&self, series: &'a DateSeries) -> &'a [(String, i64)] {
        match self {
            LastDays::All => series.as_slice(),
            LastDays::Count(n) => series.tail(*n),
        }
    }
}
