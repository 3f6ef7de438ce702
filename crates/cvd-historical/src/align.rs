//! Recovered-series alignment.
//!
//! The recovered CSV lists fewer locations than cases, in a different order.
//! Alignment produces exactly one recovered row per cases row, keyed on the
//! exact `(country, province)` labels, filling anything missing with 0.

use std::collections::HashMap;

use cvd_schemas::DateSeries;

use crate::rows::{parse_count, TimeSeriesRow};

/// Recovered counts for one cases row, over that row's date labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub country_label: String,
    pub province_label: String,
    pub series: DateSeries,
}

pub fn align_recovered(cases: &[TimeSeriesRow], recovered: &[TimeSeriesRow]) -> Vec<AlignedRow> {
    // First recovered row per exact (country, province) label pair.
    let mut by_location: HashMap<(&str, &str), HashMap<&str, &str>> = HashMap::new();
    for row in recovered {
        by_location
            .entry((row.country_label.as_str(), row.province_label.as_str()))
            .or_insert_with(|| {
                row.series
                    .iter()
                    .map(|(d, v)| (d.as_str(), v.as_str()))
                    .collect()
            });
    }

    cases
        .iter()
        .map(|row| {
            let matched =
                by_location.get(&(row.country_label.as_str(), row.province_label.as_str()));
            let series = row
                .dates()
                .map(|date| {
                    let value = matched
                        .and_then(|values| values.get(date))
                        .map_or(0, |raw| parse_count(raw));
                    (date.to_string(), value)
                })
                .collect();
            AlignedRow {
                country_label: row.country_label.clone(),
                province_label: row.province_label.clone(),
                series,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, province: &str, series: &[(&str, &str)]) -> TimeSeriesRow {
        TimeSeriesRow {
            country_label: country.into(),
            province_label: province.into(),
            latitude: String::new(),
            longitude: String::new(),
            series: series
                .iter()
                .map(|(d, v)| (d.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn output_follows_cases_order_and_length() {
        let cases = vec![
            row("US", "", &[("1/22/20", "1")]),
            row("Italy", "", &[("1/22/20", "2")]),
            row("China", "Hubei", &[("1/22/20", "3")]),
        ];
        let recovered = vec![
            row("China", "Hubei", &[("1/22/20", "28")]),
            row("Italy", "", &[("1/22/20", "5")]),
        ];

        let aligned = align_recovered(&cases, &recovered);
        assert_eq!(aligned.len(), 3);
        assert_eq!(aligned[0].country_label, "US");
        assert_eq!(aligned[0].series.get("1/22/20"), Some(0));
        assert_eq!(aligned[1].series.get("1/22/20"), Some(5));
        assert_eq!(aligned[2].province_label, "Hubei");
        assert_eq!(aligned[2].series.get("1/22/20"), Some(28));
    }

    #[test]
    fn missing_and_blank_dates_default_to_zero() {
        let cases = vec![row("Italy", "", &[("1/22/20", "1"), ("1/23/20", "2"), ("1/24/20", "3")])];
        let recovered = vec![row("Italy", "", &[("1/22/20", "1"), ("1/23/20", "")])];

        let aligned = align_recovered(&cases, &recovered);
        let values: Vec<_> = aligned[0].series.iter().collect();
        assert_eq!(values, vec![("1/22/20", 1), ("1/23/20", 0), ("1/24/20", 0)]);
    }

    #[test]
    fn labels_match_exactly() {
        let cases = vec![row("Korea, South", "", &[("1/22/20", "1")])];
        let recovered = vec![row("korea, south", "", &[("1/22/20", "9")])];
        let aligned = align_recovered(&cases, &recovered);
        assert_eq!(aligned[0].series.get("1/22/20"), Some(0));
    }

    #[test]
    fn first_duplicate_recovered_row_wins() {
        let cases = vec![row("France", "", &[("1/22/20", "1")])];
        let recovered = vec![
            row("France", "", &[("1/22/20", "4")]),
            row("France", "", &[("1/22/20", "8")]),
        ];
        let aligned = align_recovered(&cases, &recovered);
        assert_eq!(aligned[0].series.get("1/22/20"), Some(4));
    }

    #[test]
    fn empty_recovered_yields_all_zero_rows() {
        let cases = vec![row("Peru", "", &[("1/22/20", "1"), ("1/23/20", "1")])];
        let aligned = align_recovered(&cases, &[]);
        assert!(aligned[0].series.iter().all(|(_, v)| v == 0));
        assert_eq!(aligned[0].series.len(), 2);
    }
}
