//! End-to-end historical pipeline: CSV text -> snapshot -> query views.
//!
//! Uses the embedded country table so identity resolution matches what the
//! service does at runtime.

use cvd_historical::{
    build_from_csv, country_request, historical_all, historical_country, historical_data,
    BuildError, CountryResponse, DataShapeError, LastDays, SeriesDocuments,
};
use cvd_schemas::{LocationSnapshot, ProvinceSelection};
use cvd_sources::CountryTable;

const HEADER: &str = "Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20,1/25/20";

fn cases() -> String {
    format!(
        "{HEADER}\n\
         ,US,40.0,-100.0,1,2,5,9\n\
         ,Italy,41.8,12.5,0,0,2,3\n\
         Ontario,Canada,51.2,-85.3,1,1,2,2\n\
         Quebec,Canada,52.9,-73.5,0,1,1,4\n\
         ,Canada,56.1,-106.3,3,3,3,3\n\
         ,Diamond Princess,0,0,10,20,30,40\n\
         ,Taiwan*,23.7,121.0,1,1,3,3\n"
    )
}

fn deaths() -> String {
    format!(
        "{HEADER}\n\
         ,US,40.0,-100.0,0,0,,1\n\
         ,Italy,41.8,12.5,0,0,0,1\n\
         Ontario,Canada,51.2,-85.3,0,0,0,0\n\
         Quebec,Canada,52.9,-73.5,0,0,0,1\n\
         ,Canada,56.1,-106.3,0,0,0,0\n\
         ,Diamond Princess,0,0,0,1,1,2\n\
         ,Taiwan*,23.7,121.0,0,0,0,0\n"
    )
}

fn recovered() -> String {
    // Fewer rows, different order; Canada reports nationally only.
    format!(
        "{HEADER}\n\
         ,Canada,56.1,-106.3,0,1,1,2\n\
         ,Italy,41.8,12.5,0,0,1,\n\
         ,Taiwan*,23.7,121.0,0,0,1,1\n"
    )
}

fn snapshot() -> Vec<LocationSnapshot> {
    let (c, d, r) = (cases(), deaths(), recovered());
    build_from_csv(
        SeriesDocuments {
            cases: &c,
            deaths: &d,
            recovered: &r,
        },
        CountryTable::embedded(),
    )
    .unwrap()
}

#[test]
fn snapshot_follows_cases_order_with_aligned_key_sets() {
    let snap = snapshot();
    let countries: Vec<_> = snap.iter().map(|l| l.country.as_str()).collect();
    assert_eq!(
        countries,
        vec!["USA", "Italy", "Canada", "Canada", "Canada", "Diamond Princess", "Taiwan"]
    );

    for loc in &snap {
        let c: Vec<_> = loc.timeline.cases.dates().collect();
        assert_eq!(c, loc.timeline.deaths.dates().collect::<Vec<_>>());
        assert_eq!(c, loc.timeline.recovered.dates().collect::<Vec<_>>());
        assert_eq!(c, vec!["1/22/20", "1/23/20", "1/24/20", "1/25/20"]);
    }
}

#[test]
fn us_row_without_recovered_is_zero_filled() {
    let us = &snapshot()[0];
    assert_eq!(us.country_info.iso2.as_deref(), Some("US"));
    assert_eq!(us.province, None);
    assert_eq!(us.timeline.cases.iter().map(|(_, v)| v).collect::<Vec<_>>(), vec![1, 2, 5, 9]);
    assert_eq!(us.timeline.deaths.iter().map(|(_, v)| v).collect::<Vec<_>>(), vec![0, 0, 0, 1]);
    assert!(us.timeline.recovered.iter().all(|(_, v)| v == 0));
}

#[test]
fn recovered_is_matched_by_exact_location() {
    let snap = snapshot();
    let italy = &snap[1];
    assert_eq!(
        italy.timeline.recovered.iter().map(|(_, v)| v).collect::<Vec<_>>(),
        vec![0, 0, 1, 0]
    );
    // Provincial Canada rows have no recovered counterpart.
    assert!(snap[2].timeline.recovered.iter().all(|(_, v)| v == 0));
    assert_eq!(snap[4].timeline.recovered.get("1/25/20"), Some(2));
}

#[test]
fn snapshot_json_keeps_source_date_order() {
    let snap = snapshot();
    let text = serde_json::to_string(&snap[0]).unwrap();
    let first = text.find("\"1/22/20\"").unwrap();
    let last = text.find("\"1/25/20\"").unwrap();
    assert!(first < last);

    let back: LocationSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap[0]);
}

#[test]
fn trailing_window_trims_by_position() {
    let out = historical_data(snapshot(), LastDays::parse(Some("2")));
    for loc in &out {
        assert_eq!(loc.timeline.cases.dates().collect::<Vec<_>>(), vec!["1/24/20", "1/25/20"]);
    }

    let full = historical_data(snapshot(), LastDays::parse(Some("all")));
    assert_eq!(full[0].timeline.cases.len(), 4);
}

#[test]
fn global_sum_adds_every_location() {
    let t = historical_all(&snapshot(), LastDays::Count(1));
    assert_eq!(t.cases.len(), 1);
    assert_eq!(t.cases.get("1/25/20"), Some(9 + 3 + 2 + 4 + 3 + 40 + 3));
    assert_eq!(t.deaths.get("1/25/20"), Some(1 + 1 + 1 + 2));
}

/// Cached snapshots whose locations carry different date labels, as left
/// behind by feeds that started reporting on different days.
fn staggered_cache() -> Vec<LocationSnapshot> {
    let timeline = |cases: serde_json::Value| {
        serde_json::json!({ "cases": cases, "deaths": {}, "recovered": {} })
    };
    serde_json::from_value(serde_json::json!([
        { "country": "Italy", "countryInfo": { "country": "Italy", "iso2": "IT", "iso3": "ITA", "_id": 380 },
          "province": "lombardy", "timeline": timeline(serde_json::json!({ "a": 1, "b": 2 })) },
        { "country": "Italy", "countryInfo": { "country": "Italy", "iso2": "IT", "iso3": "ITA", "_id": 380 },
          "province": "lazio", "timeline": timeline(serde_json::json!({ "b": 10, "c": 5 })) }
    ]))
    .unwrap()
}

fn pairs(series: &cvd_schemas::DateSeries) -> Vec<(&str, i64)> {
    series.iter().collect()
}

#[test]
fn sums_match_on_date_labels_not_positions() {
    let global = historical_all(&staggered_cache(), LastDays::All);
    assert_eq!(pairs(&global.cases), vec![("a", 1), ("b", 12), ("c", 5)]);

    let italy = historical_country(
        &staggered_cache(),
        "italy",
        None,
        LastDays::All,
        CountryTable::embedded(),
    )
    .unwrap();
    assert_eq!(pairs(&italy.timeline.cases), vec![("a", 1), ("b", 12), ("c", 5)]);

    // The window applies per location before summing.
    let last = historical_all(&staggered_cache(), LastDays::Count(1));
    assert_eq!(pairs(&last.cases), vec![("b", 2), ("c", 5)]);
}

#[test]
fn country_by_iso_code_sums_provinces() {
    let h = historical_country(&snapshot(), "CAN", None, LastDays::All, CountryTable::embedded())
        .unwrap();
    assert_eq!(h.country, "Canada");
    assert_eq!(
        h.province,
        ProvinceSelection::All(vec!["ontario".into(), "quebec".into(), "mainland".into()])
    );
    assert_eq!(h.timeline.cases.get("1/25/20"), Some(2 + 4 + 3));
}

#[test]
fn mainland_alias_selects_the_null_province_row() {
    let h = historical_country(
        &snapshot(),
        "canada",
        Some("Mainland"),
        LastDays::All,
        CountryTable::embedded(),
    )
    .unwrap();
    assert_eq!(h.timeline.cases.get("1/22/20"), Some(3));
}

#[test]
fn unresolved_location_matches_by_name() {
    let h = historical_country(
        &snapshot(),
        "Diamond Princess",
        None,
        LastDays::All,
        CountryTable::embedded(),
    )
    .unwrap();
    assert_eq!(h.country, "Diamond Princess");
    assert_eq!(h.timeline.cases.get("1/25/20"), Some(40));
}

#[test]
fn starred_label_resolves_after_stripping() {
    let h = historical_country(&snapshot(), "TW", None, LastDays::All, CountryTable::embedded())
        .unwrap();
    assert_eq!(h.country, "Taiwan");
    assert_eq!(h.timeline.recovered.get("1/25/20"), Some(1));
}

#[test]
fn absent_country_is_not_found() {
    let snap = snapshot();
    let table = CountryTable::embedded();
    assert!(historical_country(&snap, "France", None, LastDays::All, table).is_none());
    assert!(country_request(&snap, "France", None, LastDays::All, table).is_none());
}

#[test]
fn multi_country_request_is_positional() {
    let r = country_request(
        &snapshot(),
        "usa,france,italy",
        None,
        LastDays::All,
        CountryTable::embedded(),
    )
    .unwrap();
    let CountryResponse::Batch(items) = r else {
        panic!("expected batch");
    };
    let json = serde_json::to_value(&items).unwrap();
    assert_eq!(json[0]["country"], "USA");
    assert_eq!(
        json[1]["message"],
        "Country not found or doesn't have any historical data"
    );
    assert_eq!(json[2]["country"], "Italy");
}

#[test]
fn row_count_mismatch_aborts_the_build() {
    let c = cases();
    let d = format!("{HEADER}\n,US,40.0,-100.0,0,0,0,1\n");
    let r = recovered();
    let err = build_from_csv(
        SeriesDocuments {
            cases: &c,
            deaths: &d,
            recovered: &r,
        },
        CountryTable::embedded(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Shape(DataShapeError::RowCountMismatch {
            cases: 7,
            deaths: 1,
            recovered: 7
        })
    ));
}

#[test]
fn bad_metadata_prefix_aborts_the_build() {
    let bad = "Country,Lat,Long,1/22/20\nUS,1,1,1\n";
    let r = recovered();
    let err = build_from_csv(
        SeriesDocuments {
            cases: bad,
            deaths: bad,
            recovered: &r,
        },
        CountryTable::embedded(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Shape(DataShapeError::MetadataPrefix { .. })));
}
