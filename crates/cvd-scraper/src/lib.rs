//! cvd-scraper
//!
//! Scheduled jobs that refill the cache: the historical time-series rebuild,
//! the JHU daily-report snapshot and the worldometers tables. A failed job
//! logs and leaves the previously stored value in place; a job only writes
//! once everything it stores has been built.

pub mod jhu;
pub mod worldometers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use cvd_config::{CacheKey, SourcesConfig};
use cvd_historical::{build_from_csv, Metric, SeriesDocuments};
use cvd_sources::{join_url, CountryResolver, CsvFetcher};
use cvd_store::{set_json, KeyValueStore};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Outcome of one scrape cycle: stored location counts, `None` for a job
/// that failed and kept the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub cycle_id: Uuid,
    pub historical: Option<usize>,
    pub jhu_locations: Option<usize>,
    /// Country rows in today's worldometers table.
    pub worldometers: Option<usize>,
}

impl ScrapeReport {
    pub fn is_complete(&self) -> bool {
        self.historical.is_some() && self.jhu_locations.is_some() && self.worldometers.is_some()
    }
}

pub struct Scraper {
    store: Arc<dyn KeyValueStore>,
    fetcher: Arc<dyn CsvFetcher>,
    resolver: Arc<dyn CountryResolver>,
    sources: SourcesConfig,
}

impl Scraper {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        fetcher: Arc<dyn CsvFetcher>,
        resolver: Arc<dyn CountryResolver>,
        sources: SourcesConfig,
    ) -> Self {
        Self {
            store,
            fetcher,
            resolver,
            sources,
        }
    }

    // -----------------------------------------------------------------------
    // Historical time series
    // -----------------------------------------------------------------------

    async fn fetch_series(&self, metric: Metric) -> anyhow::Result<String> {
        let url = join_url(&self.sources.historical_base_url, metric.global_file_name());
        self.fetcher
            .fetch_text(&url)
            .await
            .with_context(|| format!("fetch {metric} series"))
    }

    /// Fetch the three global series, rebuild the snapshot and replace the
    /// stored one. Returns the number of locations written.
    pub async fn historical(&self) -> anyhow::Result<usize> {
        let (cases, deaths, recovered) = tokio::try_join!(
            self.fetch_series(Metric::Cases),
            self.fetch_series(Metric::Deaths),
            self.fetch_series(Metric::Recovered),
        )?;

        let snapshot = build_from_csv(
            SeriesDocuments {
                cases: &cases,
                deaths: &deaths,
                recovered: &recovered,
            },
            self.resolver.as_ref(),
        )
        .context("build historical snapshot")?;

        set_json(self.store.as_ref(), CacheKey::Historical, &snapshot)
            .await
            .context("store historical snapshot")?;

        info!("Updated JHU CSSE Historical: {} locations", snapshot.len());
        Ok(snapshot.len())
    }

    // -----------------------------------------------------------------------
    // JHU daily report
    // -----------------------------------------------------------------------

    /// Fetch yesterday's daily report (relative to `now`) and replace the
    /// stored location list.
    pub async fn jhu_locations(&self, now: DateTime<Utc>) -> anyhow::Result<usize> {
        let file = jhu::daily_report_name(now);
        info!(file = %file, "using JHU CSSE daily report");

        let url = join_url(&self.sources.jhu_daily_base_url, &file);
        let text = self
            .fetcher
            .fetch_text(&url)
            .await
            .context("fetch JHU daily report")?;

        let locations = jhu::parse_daily_report(&text).context("parse JHU daily report")?;
        if locations.is_empty() {
            warn!(file = %file, "JHU daily report has no rows");
        }

        set_json(self.store.as_ref(), CacheKey::JhuLocations, &locations)
            .await
            .context("store JHU locations")?;

        info!("Updated JHU CSSE: {} locations", locations.len());
        Ok(locations.len())
    }

    // -----------------------------------------------------------------------
    // Worldometers
    // -----------------------------------------------------------------------

    /// Fetch the worldometers page and replace the country and continent
    /// tables of all three days. Returns today's country row count.
    pub async fn worldometers(&self, now: DateTime<Utc>) -> anyhow::Result<usize> {
        let page = self
            .fetcher
            .fetch_text(&self.sources.worldometers_url)
            .await
            .context("fetch worldometers page")?;

        let mut tables = Vec::with_capacity(worldometers::DAYS.len());
        for day in worldometers::DAYS {
            let table = worldometers::parse_table(&page, day, self.resolver.as_ref(), now)
                .context("parse worldometers page")?;
            tables.push((day, table));
        }

        for (day, table) in &tables {
            let countries = day.countries_key();
            set_json(self.store.as_ref(), countries, &table.countries)
                .await
                .with_context(|| format!("store {countries}"))?;
            let continents = day.continents_key();
            set_json(self.store.as_ref(), continents, &table.continents)
                .await
                .with_context(|| format!("store {continents}"))?;
        }

        let count = tables.first().map_or(0, |(_, t)| t.countries.len());
        info!("Updated Worldometers: {count} countries");
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // Cycle
    // -----------------------------------------------------------------------

    /// Run every job concurrently. Job failures are logged, never propagated.
    pub async fn execute(&self) -> ScrapeReport {
        let cycle_id = Uuid::new_v4();
        info!(%cycle_id, source = self.fetcher.source_name(), "scrape cycle starting");

        let now = Utc::now();
        let (historical, jhu_locations, worldometers) = tokio::join!(
            self.historical(),
            self.jhu_locations(now),
            self.worldometers(now),
        );

        let historical = historical
            .inspect_err(|e| {
                error!(%cycle_id, "historical rebuild failed, keeping previous snapshot: {e:#}")
            })
            .ok();
        let jhu_locations = jhu_locations
            .inspect_err(|e| error!(%cycle_id, "JHU CSSE update failed, keeping previous data: {e:#}"))
            .ok();
        let worldometers = worldometers
            .inspect_err(|e| error!(%cycle_id, "worldometers update failed, keeping previous tables: {e:#}"))
            .ok();

        ScrapeReport {
            cycle_id,
            historical,
            jhu_locations,
            worldometers,
        }
    }
}

/// Spawn the scrape loop: one cycle immediately, then one per `interval`.
pub fn spawn_scrape_loop(scraper: Arc<Scraper>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            scraper.execute().await;
        }
    })
}
