//! Worldometers country table.
//!
//! The page renders the same table three times (today, yesterday, two days
//! ago). Each copy becomes a country list, the `World` row included, and a
//! continent list. Cells are read by column position.

use std::fmt;

use chrono::{DateTime, Utc};
use cvd_config::TableDay;
use cvd_schemas::WorldometersRow;
use cvd_sources::html::{slice_between_ci, tag_blocks_ci, text, TagBlock};
use cvd_sources::CountryResolver;
use serde_json::{json, Map, Number, Value};

/// Every table on the page, in storage order.
pub const DAYS: [TableDay; 3] = [TableDay::Today, TableDay::Yesterday, TableDay::TwoDaysAgo];

const WORLD: &str = "World";

const COL_NAME: usize = 1;
const COL_CONTINENT: usize = 15;

/// `(column, field)` pairs copied into a row's statistics.
const STAT_COLUMNS: &[(usize, &str)] = &[
    (2, "cases"),
    (3, "todayCases"),
    (4, "deaths"),
    (5, "todayDeaths"),
    (6, "recovered"),
    (7, "todayRecovered"),
    (8, "active"),
    (9, "critical"),
    (10, "casesPerOneMillion"),
    (11, "deathsPerOneMillion"),
    (12, "tests"),
    (13, "testsPerOneMillion"),
    (14, "population"),
];

pub fn table_id(day: TableDay) -> &'static str {
    match day {
        TableDay::Today => "main_table_countries_today",
        TableDay::Yesterday => "main_table_countries_yesterday",
        TableDay::TwoDaysAgo => "main_table_countries_yesterday2",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No table with this id on the page.
    MissingTable(&'static str),
    /// The table exists but yielded no country rows.
    EmptyTable(&'static str),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingTable(id) => write!(f, "worldometers table {id} not found"),
            PageError::EmptyTable(id) => write!(f, "worldometers table {id} has no country rows"),
        }
    }
}

impl std::error::Error for PageError {}

/// One parsed copy of the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTable {
    pub countries: Vec<WorldometersRow>,
    pub continents: Vec<WorldometersRow>,
}

/// A statistic cell: thousands separators and a leading `+` dropped, blank
/// or `N/A` is `null`.
pub fn parse_stat(cell: &str) -> Value {
    let cleaned: String = cell
        .chars()
        .filter(|c| !matches!(c, ',' | '+') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("n/a") {
        return Value::Null;
    }
    if let Ok(n) = cleaned.parse::<i64>() {
        return Value::from(n);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

fn stats(cells: &[String], updated: DateTime<Utc>) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("updated".to_string(), Value::from(updated.timestamp_millis()));
    for &(col, field) in STAT_COLUMNS {
        let value = cells.get(col).map_or(Value::Null, |c| parse_stat(c));
        out.insert(field.to_string(), value);
    }
    out
}

fn country_info(name: &str, resolver: &dyn CountryResolver) -> Value {
    let info = resolver.resolve(name);
    json!({
        "_id": info.id,
        "iso2": info.iso2,
        "iso3": info.iso3,
    })
}

fn is_continent_row(tr: &TagBlock<'_>) -> bool {
    tr.has_class("row_continent") || tr.attr("data-continent").is_some()
}

/// Parse the copy of the table for `day`.
pub fn parse_table(
    page: &str,
    day: TableDay,
    resolver: &dyn CountryResolver,
    updated: DateTime<Utc>,
) -> Result<DayTable, PageError> {
    let id = table_id(day);
    let table = slice_between_ci(page, &format!("id=\"{id}\""), "</table>")
        .ok_or(PageError::MissingTable(id))?;

    let mut out = DayTable::default();
    for tr in tag_blocks_ci(table, "tr") {
        // Header rows hold `<th>` cells only and fall out here.
        let cells: Vec<String> = tag_blocks_ci(tr.inner, "td")
            .iter()
            .map(|td| text(td.inner))
            .collect();
        let Some(name) = cells.get(COL_NAME).filter(|n| !n.is_empty()) else {
            continue;
        };
        // Footer summary rows ("Total:").
        if name.ends_with(':') {
            continue;
        }

        let row_stats = stats(&cells, updated);
        let continent = cells.get(COL_CONTINENT).filter(|c| !c.is_empty()).cloned();

        if name == WORLD {
            out.countries.push(WorldometersRow {
                country: Some(name.clone()),
                country_info: None,
                continent,
                stats: row_stats,
            });
        } else if is_continent_row(&tr) {
            out.continents.push(WorldometersRow {
                country: None,
                country_info: None,
                continent: Some(name.clone()),
                stats: row_stats,
            });
        } else {
            out.countries.push(WorldometersRow {
                country: Some(name.clone()),
                country_info: Some(country_info(name, resolver)),
                continent,
                stats: row_stats,
            });
        }
    }

    if out.countries.iter().all(|r| r.country.as_deref() == Some(WORLD)) {
        return Err(PageError::EmptyTable(id));
    }
    Ok(out)
}
