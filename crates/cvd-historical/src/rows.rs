//! Time-series CSV rows: a fixed four-column metadata prefix followed by one
//! column per date label.

use std::fmt;

use cvd_sources::CsvTable;

use crate::error::DataShapeError;

pub const PROVINCE_COLUMN: &str = "Province/State";
pub const COUNTRY_COLUMN: &str = "Country/Region";
pub const LAT_COLUMN: &str = "Lat";
pub const LONG_COLUMN: &str = "Long";

/// Width of the metadata prefix; every later column is a date.
pub const METADATA_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cases,
    Deaths,
    Recovered,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Deaths => "deaths",
            Metric::Recovered => "recovered",
        }
    }

    /// Upstream file name of the global series for this metric.
    pub fn global_file_name(self) -> &'static str {
        match self {
            Metric::Cases => "time_series_covid19_confirmed_global.csv",
            Metric::Deaths => "time_series_covid19_deaths_global.csv",
            Metric::Recovered => "time_series_covid19_recovered_global.csv",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One location row of one metric's CSV, values still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesRow {
    pub country_label: String,
    /// Empty string when the upstream cell is blank.
    pub province_label: String,
    pub latitude: String,
    pub longitude: String,
    /// `(date label, raw cell)` in column order.
    pub series: Vec<(String, String)>,
}

impl TimeSeriesRow {
    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|(d, _)| d.as_str())
    }
}

/// Validate the metadata prefix of `table` and split every row into metadata
/// and date cells.
pub fn time_series_rows(
    table: &CsvTable,
    metric: Metric,
) -> Result<Vec<TimeSeriesRow>, DataShapeError> {
    let headers = table.headers();
    let prefix = &headers[..headers.len().min(METADATA_COLUMNS)];
    let required = [PROVINCE_COLUMN, COUNTRY_COLUMN, LAT_COLUMN, LONG_COLUMN];
    if !required.iter().all(|r| prefix.iter().any(|h| h == r)) {
        return Err(DataShapeError::MetadataPrefix {
            metric,
            found: prefix.to_vec(),
        });
    }

    let dates = &headers[METADATA_COLUMNS..];
    let rows = table
        .rows()
        .map(|row| TimeSeriesRow {
            country_label: row.get(COUNTRY_COLUMN).unwrap_or_default().to_string(),
            province_label: row.get(PROVINCE_COLUMN).unwrap_or_default().to_string(),
            latitude: row.get(LAT_COLUMN).unwrap_or_default().to_string(),
            longitude: row.get(LONG_COLUMN).unwrap_or_default().to_string(),
            series: dates
                .iter()
                .enumerate()
                .map(|(i, d)| (d.clone(), row.cell(METADATA_COLUMNS + i).to_string()))
                .collect(),
        })
        .collect();
    Ok(rows)
}

/// Integer prefix of a cell, the way upstream counts are read: optional sign,
/// then digits, anything after ignored. Blank or non-numeric cells are 0; a
/// digit run past the `i64` range saturates.
pub fn parse_count(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_sources::parse_csv;

    #[test]
    fn rows_split_metadata_from_dates() {
        let t = parse_csv(
            "Province/State,Country/Region,Lat,Long,1/22/20,1/23/20\n\
             Hubei,China,30.9,112.2,444,444\n",
        )
        .unwrap();
        let rows = time_series_rows(&t, Metric::Cases).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country_label, "China");
        assert_eq!(rows[0].province_label, "Hubei");
        assert_eq!(rows[0].dates().collect::<Vec<_>>(), vec!["1/22/20", "1/23/20"]);
        assert_eq!(rows[0].series[1].1, "444");
    }

    #[test]
    fn metadata_order_within_prefix_is_tolerated() {
        let t = parse_csv("Country/Region,Province/State,Long,Lat,1/22/20\nItaly,,12,41,3\n").unwrap();
        let rows = time_series_rows(&t, Metric::Deaths).unwrap();
        assert_eq!(rows[0].country_label, "Italy");
        assert_eq!(rows[0].series, vec![("1/22/20".to_string(), "3".to_string())]);
    }

    #[test]
    fn wrong_prefix_is_a_shape_error() {
        let t = parse_csv("Country/Region,Lat,Long,1/22/20,1/23/20\nItaly,41,12,1,2\n").unwrap();
        let err = time_series_rows(&t, Metric::Recovered).unwrap_err();
        assert!(matches!(
            err,
            DataShapeError::MetadataPrefix {
                metric: Metric::Recovered,
                ..
            }
        ));
    }

    #[test]
    fn parse_count_reads_integer_prefix() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count(" 7"), 7);
        assert_eq!(parse_count("-3"), -3);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
    }

    #[test]
    fn parse_count_saturates_on_overflow() {
        assert_eq!(parse_count("99999999999999999999"), i64::MAX);
        assert_eq!(parse_count("-99999999999999999999"), -i64::MAX);
        assert_eq!(parse_count("9223372036854775807"), i64::MAX);
    }
}
