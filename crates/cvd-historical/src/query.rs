//! Historical query engine. Pure functions over a materialised snapshot.

use std::collections::HashMap;

use cvd_schemas::{
    CountryHistory, DateSeries, LocationHistory, LocationSnapshot, ProvinceSelection, Timeline,
};
use cvd_sources::{words_standardize, CountryResolver};

use crate::window::LastDays;

pub const MAINLAND: &str = "mainland";

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

/// Date-keyed running sum: first sighting of a label initialises it, later
/// sightings add. Labels keep first-seen order.
#[derive(Debug, Default)]
struct SeriesSum {
    entries: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl SeriesSum {
    fn add(&mut self, date: &str, value: i64) {
        match self.index.get(date) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(date.to_string(), self.entries.len());
                self.entries.push((date.to_string(), value));
            }
        }
    }

    fn add_all(&mut self, entries: &[(String, i64)]) {
        for (date, value) in entries {
            self.add(date, *value);
        }
    }

    fn finish(self) -> DateSeries {
        self.entries.into()
    }
}

#[derive(Debug, Default)]
struct TimelineSum {
    cases: SeriesSum,
    deaths: SeriesSum,
    recovered: SeriesSum,
}

impl TimelineSum {
    fn add(&mut self, timeline: &Timeline, lastdays: LastDays) {
        self.cases.add_all(lastdays.apply(&timeline.cases));
        self.deaths.add_all(lastdays.apply(&timeline.deaths));
        self.recovered.add_all(lastdays.apply(&timeline.recovered));
    }

    fn finish(self) -> Timeline {
        Timeline {
            cases: self.cases.finish(),
            deaths: self.deaths.finish(),
            recovered: self.recovered.finish(),
        }
    }
}

fn trim(timeline: &Timeline, lastdays: LastDays) -> Timeline {
    Timeline {
        cases: lastdays.apply(&timeline.cases).into(),
        deaths: lastdays.apply(&timeline.deaths).into(),
        recovered: lastdays.apply(&timeline.recovered).into(),
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Every location, identity stripped, timelines trimmed to the window.
pub fn historical_data(data: Vec<LocationSnapshot>, lastdays: LastDays) -> Vec<LocationHistory> {
    data.into_iter()
        .map(|loc| LocationHistory {
            timeline: trim(&loc.timeline, lastdays),
            country: loc.country,
            province: loc.province,
        })
        .collect()
}

/// Global sum across all locations, each location windowed independently.
pub fn historical_all(data: &[LocationSnapshot], lastdays: LastDays) -> Timeline {
    let mut sum = TimelineSum::default();
    for loc in data {
        sum.add(&loc.timeline, lastdays);
    }
    sum.finish()
}

/// Summed history of the locations matching `query` (and `province`, if
/// given). `None` when nothing matches.
pub fn historical_country(
    data: &[LocationSnapshot],
    query: &str,
    province: Option<&str>,
    lastdays: LastDays,
    resolver: &dyn CountryResolver,
) -> Option<CountryHistory> {
    let wanted = resolver.resolve(query);
    let wanted_name = words_standardize(wanted.country.as_deref().unwrap_or(query));
    let wanted_province = province.map(str::to_lowercase);

    let matches = |loc: &LocationSnapshot| {
        let name_match = words_standardize(&loc.country) == wanted_name;
        if !loc.country_info.is_resolved() {
            return name_match;
        }
        let deep = name_match && loc.country_info.same_identity(&wanted);
        match wanted_province.as_deref() {
            Some(p) => {
                let province_match = match loc.province.as_deref() {
                    Some(lp) => lp == p,
                    None => p == MAINLAND,
                };
                province_match && deep
            }
            None => deep,
        }
    };

    let candidates: Vec<&LocationSnapshot> = data.iter().filter(|&loc| matches(loc)).collect();
    let first = *candidates.first()?;

    let mut sum = TimelineSum::default();
    for loc in &candidates {
        sum.add(&loc.timeline, lastdays);
    }

    let province = match province {
        Some(requested) => ProvinceSelection::Single(
            first
                .province
                .clone()
                .unwrap_or_else(|| requested.to_string()),
        ),
        None => ProvinceSelection::All(
            candidates
                .iter()
                .map(|loc| loc.province.clone().unwrap_or_else(|| MAINLAND.to_string()))
                .collect(),
        ),
    };

    let country = if first.country.is_empty() {
        wanted_name
    } else {
        first.country.clone()
    };

    Some(CountryHistory {
        country,
        province,
        timeline: sum.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_schemas::CountryInfo;

    struct Fixed;

    impl CountryResolver for Fixed {
        fn resolve(&self, label: &str) -> CountryInfo {
            let canada = CountryInfo {
                country: Some("Canada".into()),
                iso2: Some("CA".into()),
                iso3: Some("CAN".into()),
                id: Some(124),
            };
            match label.to_lowercase().as_str() {
                "canada" | "ca" | "can" => canada,
                _ => CountryInfo::default(),
            }
        }
    }

    fn series(values: &[(&str, i64)]) -> DateSeries {
        values.iter().map(|(d, v)| (d.to_string(), *v)).collect()
    }

    fn location(country: &str, resolved: bool, province: Option<&str>, base: i64) -> LocationSnapshot {
        let s = series(&[("1/1/20", base), ("1/2/20", base + 1), ("1/3/20", base + 2)]);
        LocationSnapshot {
            country: country.into(),
            country_info: if resolved {
                Fixed.resolve(country)
            } else {
                CountryInfo::default()
            },
            province: province.map(str::to_string),
            timeline: Timeline {
                cases: s.clone(),
                deaths: s.clone(),
                recovered: s,
            },
        }
    }

    fn canada() -> Vec<LocationSnapshot> {
        vec![
            location("Canada", true, Some("ontario"), 10),
            location("Canada", true, Some("quebec"), 100),
            location("Canada", true, None, 1000),
            location("Diamond Princess", false, None, 5),
        ]
    }

    #[test]
    fn historical_data_strips_identity_and_trims() {
        let out = historical_data(canada(), LastDays::Count(2));
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].timeline.cases.dates().collect::<Vec<_>>(), vec!["1/2/20", "1/3/20"]);
        assert_eq!(out[0].province.as_deref(), Some("ontario"));
        let json = serde_json::to_value(&out[0]).unwrap();
        assert!(json.get("countryInfo").is_none());
    }

    #[test]
    fn historical_all_sums_every_location() {
        let t = historical_all(&canada(), LastDays::All);
        assert_eq!(t.cases.get("1/1/20"), Some(10 + 100 + 1000 + 5));
        assert_eq!(t.recovered.get("1/3/20"), Some(12 + 102 + 1002 + 7));
    }

    /// Two Canadian locations whose date labels only partly overlap.
    fn staggered() -> Vec<LocationSnapshot> {
        let mut a = location("Canada", true, Some("ontario"), 0);
        a.timeline.cases = series(&[("a", 1), ("b", 2)]);
        let mut b = location("Canada", true, Some("quebec"), 0);
        b.timeline.cases = series(&[("b", 10), ("c", 5)]);
        vec![a, b]
    }

    fn pairs(s: &DateSeries) -> Vec<(&str, i64)> {
        s.iter().collect()
    }

    #[test]
    fn historical_all_sums_by_date_label() {
        let t = historical_all(&staggered(), LastDays::All);
        assert_eq!(pairs(&t.cases), vec![("a", 1), ("b", 12), ("c", 5)]);
    }

    #[test]
    fn country_query_sums_by_date_label() {
        let h = historical_country(&staggered(), "canada", None, LastDays::All, &Fixed).unwrap();
        assert_eq!(pairs(&h.timeline.cases), vec![("a", 1), ("b", 12), ("c", 5)]);
    }

    #[test]
    fn country_query_sums_all_provinces() {
        let h = historical_country(&canada(), "CA", None, LastDays::All, &Fixed).unwrap();
        assert_eq!(h.country, "Canada");
        assert_eq!(
            h.province,
            ProvinceSelection::All(vec!["ontario".into(), "quebec".into(), "mainland".into()])
        );
        assert_eq!(h.timeline.cases.get("1/1/20"), Some(1110));
    }

    #[test]
    fn province_query_is_case_insensitive() {
        let h = historical_country(&canada(), "canada", Some("Quebec"), LastDays::All, &Fixed)
            .unwrap();
        assert_eq!(h.province, ProvinceSelection::Single("quebec".into()));
        assert_eq!(h.timeline.deaths.get("1/2/20"), Some(101));
    }

    #[test]
    fn mainland_matches_null_province() {
        let h = historical_country(&canada(), "canada", Some("MAINLAND"), LastDays::All, &Fixed)
            .unwrap();
        assert_eq!(h.province, ProvinceSelection::Single("MAINLAND".into()));
        assert_eq!(h.timeline.cases.get("1/1/20"), Some(1000));
    }

    #[test]
    fn unresolved_location_matches_by_name_only() {
        let h = historical_country(
            &canada(),
            "diamond princess",
            Some("anything"),
            LastDays::Count(1),
            &Fixed,
        )
        .unwrap();
        assert_eq!(h.country, "Diamond Princess");
        assert_eq!(h.timeline.cases.iter().collect::<Vec<_>>(), vec![("1/3/20", 7)]);
    }

    #[test]
    fn unknown_country_or_province_is_none() {
        assert!(historical_country(&canada(), "Atlantis", None, LastDays::All, &Fixed).is_none());
        assert!(
            historical_country(&canada(), "canada", Some("yukon"), LastDays::All, &Fixed).is_none()
        );
    }
}
