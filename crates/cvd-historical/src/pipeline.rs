//! CSV text -> snapshot, the whole build chain in one call.

use cvd_schemas::LocationSnapshot;
use cvd_sources::{parse_csv, CountryResolver};
use tracing::debug;

use crate::align::align_recovered;
use crate::build::build_snapshot;
use crate::error::BuildError;
use crate::rows::{time_series_rows, Metric, TimeSeriesRow};

/// Raw text of the three global time-series documents.
#[derive(Debug, Clone, Copy)]
pub struct SeriesDocuments<'a> {
    pub cases: &'a str,
    pub deaths: &'a str,
    pub recovered: &'a str,
}

fn rows(text: &str, metric: Metric) -> Result<Vec<TimeSeriesRow>, BuildError> {
    let table = parse_csv(text).map_err(|source| BuildError::Csv { metric, source })?;
    Ok(time_series_rows(&table, metric)?)
}

pub fn build_from_csv(
    docs: SeriesDocuments<'_>,
    resolver: &dyn CountryResolver,
) -> Result<Vec<LocationSnapshot>, BuildError> {
    let cases = rows(docs.cases, Metric::Cases)?;
    let deaths = rows(docs.deaths, Metric::Deaths)?;
    let recovered = rows(docs.recovered, Metric::Recovered)?;
    debug!(
        cases = cases.len(),
        deaths = deaths.len(),
        recovered = recovered.len(),
        "parsed time series"
    );

    let aligned = align_recovered(&cases, &recovered);
    Ok(build_snapshot(&cases, &deaths, &aligned, resolver)?)
}
