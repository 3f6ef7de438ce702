//! Historical snapshot builder: fuse cases, deaths and aligned recovered rows
//! into one `LocationSnapshot` per cases row.

use cvd_schemas::{DateSeries, LocationSnapshot, Timeline};
use cvd_sources::CountryResolver;

use crate::align::AlignedRow;
use crate::error::DataShapeError;
use crate::rows::{parse_count, TimeSeriesRow};

pub fn build_snapshot(
    cases: &[TimeSeriesRow],
    deaths: &[TimeSeriesRow],
    recovered: &[AlignedRow],
    resolver: &dyn CountryResolver,
) -> Result<Vec<LocationSnapshot>, DataShapeError> {
    if cases.len() != deaths.len() || cases.len() != recovered.len() {
        return Err(DataShapeError::RowCountMismatch {
            cases: cases.len(),
            deaths: deaths.len(),
            recovered: recovered.len(),
        });
    }

    let snapshot = cases
        .iter()
        .zip(deaths)
        .zip(recovered)
        .map(|((c, d), r)| build_location(c, d, r, resolver))
        .collect();
    Ok(snapshot)
}

fn build_location(
    cases: &TimeSeriesRow,
    deaths: &TimeSeriesRow,
    recovered: &AlignedRow,
    resolver: &dyn CountryResolver,
) -> LocationSnapshot {
    let width = cases.series.len();
    let mut timeline = Timeline {
        cases: DateSeries::with_capacity(width),
        deaths: DateSeries::with_capacity(width),
        recovered: DateSeries::with_capacity(width),
    };

    // Deaths and recovered are read by column position under the cases date
    // labels, so all three series share one key set.
    for (i, (date, raw)) in cases.series.iter().enumerate() {
        let death = deaths.series.get(i).map_or(0, |(_, v)| parse_count(v));
        let recovered = recovered.series.as_slice().get(i).map_or(0, |(_, v)| *v);
        timeline.cases.push(date.clone(), parse_count(raw));
        timeline.deaths.push(date.clone(), death);
        timeline.recovered.push(date.clone(), recovered);
    }

    let label = cases.country_label.replace('*', "");
    let country_info = resolver.resolve(&label);
    let country = country_info
        .country
        .clone()
        .unwrap_or_else(|| cases.country_label.clone());
    let province = match cases.province_label.as_str() {
        "" => None,
        p => Some(p.to_lowercase()),
    };

    LocationSnapshot {
        country,
        country_info,
        province,
        timeline,
    }
}
