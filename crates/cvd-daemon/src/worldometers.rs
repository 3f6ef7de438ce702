//! Read-side views over the worldometers country and continent tables.
//!
//! The tables are written into the cache by the scraper's worldometers job;
//! these functions only select, reshape and clean rows.

use std::cmp::Ordering;

use cvd_schemas::WorldometersRow;
use cvd_sources::{words_standardize, CountryResolver};
use serde_json::{Map, Value};

const WORLD: &str = "world";

fn is_world(row: &WorldometersRow) -> bool {
    row.country
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(WORLD))
}

/// Replace the typographic apostrophe in the country name (`Côte d’Ivoire`).
pub fn fix_apostrophe(mut row: WorldometersRow) -> WorldometersRow {
    if let Some(country) = row.country.as_mut() {
        if country.contains('’') {
            *country = country.replace('’', "'");
        }
    }
    row
}

/// Every `null` statistic becomes `0`.
pub fn transform_null(mut row: WorldometersRow) -> WorldometersRow {
    for value in row.stats.values_mut() {
        if value.is_null() {
            *value = Value::from(0);
        }
    }
    row
}

/// Global totals: the `world` row without identity fields, plus
/// `affectedCountries`. `None` when the table has no world row.
pub fn world_summary(rows: &[WorldometersRow], allow_null: bool) -> Option<Map<String, Value>> {
    let world = rows.iter().find(|r| is_world(r))?.clone();
    let world = if allow_null { world } else { transform_null(world) };

    let mut summary = world.stats;
    summary.insert(
        "affectedCountries".to_string(),
        Value::from(rows.len().saturating_sub(1)),
    );
    Some(summary)
}

/// Country rows (world excluded), apostrophes fixed, optionally sorted.
pub fn country_rows(rows: Vec<WorldometersRow>, sort: Option<&str>) -> Vec<WorldometersRow> {
    let mut out: Vec<WorldometersRow> = rows
        .into_iter()
        .filter(|r| !is_world(r))
        .map(fix_apostrophe)
        .collect();
    if let Some(field) = sort {
        sort_descending(&mut out, field);
    }
    out
}

/// Descending by a numeric statistic; rows without it keep their relative
/// order after the rest.
pub fn sort_descending(rows: &mut [WorldometersRow], field: &str) {
    let key = |r: &WorldometersRow| r.stats.get(field).and_then(Value::as_f64);
    rows.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn info_str<'a>(row: &'a WorldometersRow, field: &str) -> Option<&'a str> {
    row.country_info.as_ref()?.get(field)?.as_str()
}

fn info_id(row: &WorldometersRow) -> Option<u64> {
    let info = row.country_info.as_ref()?;
    info.get("_id").or_else(|| info.get("id"))?.as_u64()
}

/// Strict: standardized name equal (query or its resolved name), or iso2 /
/// iso3 / numeric id equal. Loose: standardized name starts with the query.
pub fn find_country<'a>(
    rows: &'a [WorldometersRow],
    query: &str,
    strict: bool,
    resolver: &dyn CountryResolver,
) -> Option<&'a WorldometersRow> {
    let wanted = words_standardize(query);
    if wanted.is_empty() {
        return None;
    }
    let resolved = resolver
        .resolve(query)
        .country
        .map(|c| words_standardize(&c));
    let code = query.trim().to_ascii_uppercase();
    let id = query.trim().parse::<u64>().ok();

    rows.iter().find(|row| {
        let name = row.country.as_deref().map(words_standardize).unwrap_or_default();
        if !strict {
            return name.starts_with(&wanted);
        }
        name == wanted
            || resolved.as_deref() == Some(name.as_str())
            || info_str(row, "iso2").is_some_and(|c| c.eq_ignore_ascii_case(&code))
            || info_str(row, "iso3").is_some_and(|c| c.eq_ignore_ascii_case(&code))
            || (id.is_some() && info_id(row) == id)
    })
}

/// Continent by name: exact standardized match when strict, prefix otherwise.
pub fn find_continent<'a>(
    rows: &'a [WorldometersRow],
    query: &str,
    strict: bool,
) -> Option<&'a WorldometersRow> {
    let wanted = words_standardize(query);
    if wanted.is_empty() {
        return None;
    }
    rows.iter().find(|row| {
        let name = row.continent.as_deref().map(words_standardize).unwrap_or_default();
        if strict {
            name == wanted
        } else {
            name.starts_with(&wanted)
        }
    })
}

/// Attach `countries`: names of the country rows on this continent.
pub fn with_countries(mut continent: WorldometersRow, countries: &[WorldometersRow]) -> WorldometersRow {
    let names: Vec<Value> = countries
        .iter()
        .filter(|c| c.continent.is_some() && c.continent == continent.continent)
        .filter_map(|c| c.country.clone())
        .map(Value::from)
        .collect();
    continent.stats.insert("countries".to_string(), Value::Array(names));
    continent
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_sources::CountryTable;
    use serde_json::json;

    fn rows() -> Vec<WorldometersRow> {
        serde_json::from_value(json!([
            { "country": "World", "cases": 1000, "deaths": null },
            { "country": "USA", "countryInfo": { "_id": 840, "iso2": "US", "iso3": "USA" },
              "continent": "North America", "cases": 600, "deaths": 30 },
            { "country": "Côte d’Ivoire", "countryInfo": { "_id": 384, "iso2": "CI", "iso3": "CIV" },
              "continent": "Africa", "cases": 50, "deaths": null },
            { "country": "Uganda", "countryInfo": { "_id": 800, "iso2": "UG", "iso3": "UGA" },
              "continent": "Africa", "cases": 70, "deaths": 1 }
        ]))
        .unwrap()
    }

    fn names(rows: &[WorldometersRow]) -> Vec<&str> {
        rows.iter().filter_map(|r| r.country.as_deref()).collect()
    }

    #[test]
    fn world_summary_strips_identity() {
        let s = world_summary(&rows(), false).unwrap();
        assert_eq!(s["cases"], 1000);
        assert_eq!(s["deaths"], 0);
        assert_eq!(s["affectedCountries"], 3);
        assert!(s.get("country").is_none());

        let raw = world_summary(&rows(), true).unwrap();
        assert!(raw["deaths"].is_null());
    }

    #[test]
    fn country_rows_drop_world_and_fix_apostrophe() {
        let out = country_rows(rows(), None);
        assert_eq!(names(&out), vec!["USA", "Côte d'Ivoire", "Uganda"]);
    }

    #[test]
    fn country_rows_sorted_descending() {
        let out = country_rows(rows(), Some("cases"));
        assert_eq!(names(&out), vec!["USA", "Uganda", "Côte d'Ivoire"]);
    }

    #[test]
    fn strict_match_by_name_code_or_id() {
        let data = country_rows(rows(), None);
        let t = CountryTable::embedded();
        assert_eq!(find_country(&data, "usa", true, t).unwrap().country.as_deref(), Some("USA"));
        assert_eq!(find_country(&data, "ug", true, t).unwrap().country.as_deref(), Some("Uganda"));
        assert_eq!(find_country(&data, "384", true, t).unwrap().country.as_deref(), Some("Côte d'Ivoire"));
        assert_eq!(
            find_country(&data, "United States", true, t).unwrap().country.as_deref(),
            Some("USA")
        );
        assert!(find_country(&data, "uga", false, t).is_some());
        assert!(find_country(&data, "ugan", true, t).is_none());
    }

    #[test]
    fn continent_lookup_and_member_countries() {
        let data = rows();
        let continents: Vec<WorldometersRow> =
            serde_json::from_value(json!([{ "continent": "Africa", "cases": 120 }])).unwrap();
        let africa = find_continent(&continents, "africa", true).unwrap().clone();
        let africa = with_countries(africa, &data);
        assert_eq!(africa.stats["countries"], json!(["Côte d’Ivoire", "Uganda"]));
        assert!(find_continent(&continents, "afr", true).is_none());
        assert!(find_continent(&continents, "afr", false).is_some());
    }

    #[test]
    fn transform_null_only_touches_nulls() {
        let row = transform_null(rows().remove(2));
        assert_eq!(row.stats["deaths"], 0);
        assert_eq!(row.stats["cases"], 50);
    }
}
