//! JHU CSSE daily report: parsing and the `/jhucsse` views.
//!
//! The daily report is read by column index, not header, because its header
//! labels changed several times upstream while the column order did not.

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Ho_Chi_Minh;
use cvd_historical::parse_count;
use cvd_schemas::{Coordinates, JhuLocation, JhuStats};
use cvd_sources::{parse_records, CsvError};

const COUNTY: usize = 1;
const PROVINCE: usize = 2;
const COUNTRY: usize = 3;
const UPDATED_AT: usize = 4;
const LATITUDE: usize = 5;
const LONGITUDE: usize = 6;
const CONFIRMED: usize = 7;
const DEATHS: usize = 8;
const RECOVERED: usize = 9;

/// File name of the report for the day before `now`, in the upstream's
/// publishing timezone: `MM-DD-YYYY.csv`.
pub fn daily_report_name(now: DateTime<Utc>) -> String {
    let today = now.with_timezone(&Ho_Chi_Minh).date_naive();
    let yesterday = today.pred_opt().unwrap_or(today);
    format!("{}.csv", yesterday.format("%m-%d-%Y"))
}

fn non_empty(cell: Option<&String>) -> Option<String> {
    cell.filter(|c| !c.is_empty()).cloned()
}

fn location(cells: &[String]) -> JhuLocation {
    let text = |i: usize| cells.get(i).cloned().unwrap_or_default();
    let count = |i: usize| cells.get(i).map_or(0, |c| parse_count(c));
    JhuLocation {
        country: text(COUNTRY),
        province: non_empty(cells.get(PROVINCE)),
        county: non_empty(cells.get(COUNTY)),
        updated_at: text(UPDATED_AT),
        stats: JhuStats {
            confirmed: count(CONFIRMED),
            deaths: count(DEATHS),
            recovered: count(RECOVERED),
        },
        coordinates: Coordinates {
            latitude: text(LATITUDE),
            longitude: text(LONGITUDE),
        },
    }
}

/// Parse a daily report; the header row is skipped.
pub fn parse_daily_report(text: &str) -> Result<Vec<JhuLocation>, CsvError> {
    let records = parse_records(text)?;
    Ok(records.iter().skip(1).map(|r| location(r)).collect())
}

/// Rows without a county as-is, then one row per province summing its
/// counties (seeded from the first county row seen), in first-seen order.
pub fn generalized(data: Vec<JhuLocation>) -> Vec<JhuLocation> {
    let mut result = Vec::with_capacity(data.len());
    let mut states: Vec<JhuLocation> = Vec::new();

    for loc in data {
        if loc.county.is_none() {
            result.push(loc);
            continue;
        }
        match states.iter_mut().find(|s| s.province == loc.province) {
            Some(state) => {
                state.stats.confirmed += loc.stats.confirmed;
                state.stats.deaths += loc.stats.deaths;
                state.stats.recovered += loc.stats.recovered;
            }
            None => states.push(loc),
        }
    }

    result.extend(states);
    result
}

/// County rows, optionally narrowed to one county (matched lowercase).
pub fn counties<'a>(data: &'a [JhuLocation], county: Option<&str>) -> Vec<&'a JhuLocation> {
    let wanted = county.map(str::to_lowercase);
    data.iter()
        .filter(|loc| match (&loc.county, &wanted) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(c), Some(w)) => c.to_lowercase() == *w,
        })
        .collect()
}
