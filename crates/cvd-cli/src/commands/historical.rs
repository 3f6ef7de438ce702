//! `cvd historical`: offline build + query over local CSV files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use cvd_historical::{
    build_from_csv, country_request, historical_all, historical_data, LastDays, SeriesDocuments,
    NOT_FOUND_MESSAGE,
};
use cvd_sources::CountryTable;
use serde_json::Value;

pub struct HistoricalQuery {
    pub lastdays: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
    pub global: bool,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn run(cases: &Path, deaths: &Path, recovered: &Path, q: &HistoricalQuery) -> Result<Value> {
    let (cases, deaths, recovered) = (read(cases)?, read(deaths)?, read(recovered)?);
    let resolver = CountryTable::embedded();

    let snapshot = build_from_csv(
        SeriesDocuments {
            cases: &cases,
            deaths: &deaths,
            recovered: &recovered,
        },
        resolver,
    )
    .context("build historical snapshot")?;

    let lastdays = LastDays::parse(q.lastdays.as_deref());

    let out = match (&q.country, q.global) {
        (Some(country), _) => {
            match country_request(&snapshot, country, q.province.as_deref(), lastdays, resolver) {
                Some(found) => serde_json::to_value(found)?,
                None => bail!(NOT_FOUND_MESSAGE),
            }
        }
        (None, true) => serde_json::to_value(historical_all(&snapshot, lastdays))?,
        (None, false) => serde_json::to_value(historical_data(snapshot, lastdays))?,
    };
    Ok(out)
}
