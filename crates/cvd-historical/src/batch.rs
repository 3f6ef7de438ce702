//! Multi-country / multi-province requests for `/historical/{query}/{province}`.
//!
//! Several countries: one lookup per country, provinces ignored. One country
//! with provinces: one lookup per province. Otherwise a single lookup. Batch
//! answers keep positional correspondence with the request list by putting a
//! not-found placeholder where a lookup came back empty.

use cvd_schemas::{CountryHistory, LocationSnapshot};
use cvd_sources::{split_query, CountryResolver};
use serde::Serialize;

use crate::query::historical_country;
use crate::window::LastDays;

pub const NOT_FOUND_MESSAGE: &str = "Country not found or doesn't have any historical data";

/// One slot of a batch answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HistoricalLookup {
    Found(CountryHistory),
    NotFound { message: String },
}

impl HistoricalLookup {
    fn from_option(found: Option<CountryHistory>) -> Self {
        match found {
            Some(h) => HistoricalLookup::Found(h),
            None => HistoricalLookup::NotFound {
                message: NOT_FOUND_MESSAGE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CountryResponse {
    Single(CountryHistory),
    Batch(Vec<HistoricalLookup>),
}

/// Resolve a country request. `None` means "answer 404".
///
/// Several countries, or one country with a province list, are looked up one
/// by one and answered as a positional batch with a placeholder per miss. A
/// batch that ends up with a single entry is answered as that entry alone, so
/// a lone unknown province (`usa/atlantis`) is `None` and answers 404 rather
/// than 200 with the placeholder body.
pub fn country_request(
    data: &[LocationSnapshot],
    query: &str,
    province: Option<&str>,
    lastdays: LastDays,
    resolver: &dyn CountryResolver,
) -> Option<CountryResponse> {
    let countries = split_query(query);
    let provinces = province.map(split_query).unwrap_or_default();

    let lookup = |country: &str, province: Option<&str>| {
        HistoricalLookup::from_option(historical_country(
            data, country, province, lastdays, resolver,
        ))
    };

    let mut batch: Vec<HistoricalLookup> = match countries.as_slice() {
        [_, _, ..] => countries.iter().map(|c| lookup(c, None)).collect(),
        [country] if !provinces.is_empty() => {
            provinces.iter().map(|p| lookup(country, Some(p))).collect()
        }
        _ => {
            return historical_country(data, query, province, lastdays, resolver)
                .map(CountryResponse::Single)
        }
    };

    if batch.len() == 1 {
        return match batch.pop() {
            Some(HistoricalLookup::Found(h)) => Some(CountryResponse::Single(h)),
            _ => None,
        };
    }
    Some(CountryResponse::Batch(batch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_schemas::{CountryInfo, DateSeries, ProvinceSelection, Timeline};

    struct NameOnly;

    impl CountryResolver for NameOnly {
        fn resolve(&self, _label: &str) -> CountryInfo {
            CountryInfo::default()
        }
    }

    fn loc(country: &str, province: Option<&str>) -> LocationSnapshot {
        let s: DateSeries = vec![("1/1/20".to_string(), 1)].into();
        LocationSnapshot {
            country: country.into(),
            country_info: CountryInfo::default(),
            province: province.map(str::to_string),
            timeline: Timeline {
                cases: s.clone(),
                deaths: s.clone(),
                recovered: s,
            },
        }
    }

    fn data() -> Vec<LocationSnapshot> {
        vec![loc("Italy", None), loc("Spain", None), loc("Australia", Some("victoria"))]
    }

    #[test]
    fn single_country_answers_an_object() {
        let r = country_request(&data(), "italy", None, LastDays::All, &NameOnly).unwrap();
        assert!(matches!(r, CountryResponse::Single(ref h) if h.country == "Italy"));
    }

    #[test]
    fn several_countries_keep_request_positions() {
        let r = country_request(&data(), "italy,atlantis|spain", None, LastDays::All, &NameOnly)
            .unwrap();
        let CountryResponse::Batch(items) = r else {
            panic!("expected batch");
        };
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], HistoricalLookup::Found(h) if h.country == "Italy"));
        assert_eq!(
            items[1],
            HistoricalLookup::NotFound {
                message: NOT_FOUND_MESSAGE.into()
            }
        );
        assert!(matches!(&items[2], HistoricalLookup::Found(h) if h.country == "Spain"));
    }

    #[test]
    fn several_provinces_are_looked_up_one_by_one() {
        let r = country_request(
            &data(),
            "australia",
            Some("victoria, tasmania"),
            LastDays::All,
            &NameOnly,
        )
        .unwrap();
        let CountryResponse::Batch(items) = r else {
            panic!("expected batch");
        };
        assert_eq!(items.len(), 2);
        // Name-only matches ignore the province filter.
        assert!(matches!(
            &items[0],
            HistoricalLookup::Found(h) if h.province == ProvinceSelection::Single("victoria".into())
        ));
    }

    #[test]
    fn single_miss_is_none() {
        assert!(country_request(&data(), "atlantis", None, LastDays::All, &NameOnly).is_none());
    }

    #[test]
    fn single_entry_province_batch_miss_is_none() {
        // One country plus one province takes the batch path with one entry.
        let out = country_request(&data(), "atlantis", Some("victoria"), LastDays::All, &NameOnly);
        assert!(out.is_none());

        let hit = country_request(&data(), "australia", Some("victoria"), LastDays::All, &NameOnly);
        assert!(matches!(hit, Some(CountryResponse::Single(_))));
    }

    #[test]
    fn not_found_placeholder_serialises_as_message() {
        let v = serde_json::to_value(HistoricalLookup::from_option(None)).unwrap();
        assert_eq!(v, serde_json::json!({ "message": NOT_FOUND_MESSAGE }));
    }
}
