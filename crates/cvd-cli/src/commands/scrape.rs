//! `cvd scrape-once`: one cycle into a throwaway in-memory store.

use std::sync::Arc;

use anyhow::{Context, Result};
use cvd_config::ServiceConfig;
use cvd_scraper::{ScrapeReport, Scraper};
use cvd_sources::{CountryTable, HttpFetcher};
use cvd_store::MemoryStore;
use tracing::info;

pub async fn run_once() -> Result<ScrapeReport> {
    let (cfg, loaded) = ServiceConfig::from_env().context("load service config")?;
    info!(config_hash = %loaded.config_hash, "config loaded");

    let fetcher = HttpFetcher::new(cfg.sources.timeout()).context("build upstream http client")?;
    let scraper = Scraper::new(
        Arc::new(MemoryStore::new()),
        Arc::new(fetcher),
        Arc::new(CountryTable::embedded().clone()),
        cfg.sources,
    );
    Ok(scraper.execute().await)
}
