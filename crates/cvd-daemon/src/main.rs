//! cvd-daemon entry point.
//!
//! This file is intentionally thin: it sets up tracing, loads config, starts
//! the scrape loop, wires middleware, and serves HTTP. Handlers live in
//! `routes.rs`; shared state lives in `state.rs`.

use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use cvd_config::{report_unused_keys, ServiceConfig, UnusedKeyPolicy};
use cvd_daemon::{routes, state::AppState};
use cvd_scraper::{spawn_scrape_loop, Scraper};
use cvd_sources::{CountryResolver, CountryTable, HttpFetcher};
use cvd_store::{KeyValueStore, MemoryStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent if the file does not exist; production injects env vars directly.
    let _ = dotenvy::dotenv();

    init_tracing();

    let (cfg, loaded) = ServiceConfig::from_env().context("load service config")?;
    info!(config_hash = %loaded.config_hash, "config loaded");
    for key in report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)? {
        warn!(key = %key, "unused config key");
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let resolver: Arc<dyn CountryResolver> = Arc::new(CountryTable::embedded().clone());
    let fetcher =
        Arc::new(HttpFetcher::new(cfg.sources.timeout()).context("build upstream http client")?);

    let scraper = Arc::new(Scraper::new(
        Arc::clone(&store),
        fetcher,
        Arc::clone(&resolver),
        cfg.sources.clone(),
    ));
    let interval = cfg.scrape_interval();
    info!(interval_ms = cfg.scraper.interval_ms, "scrape loop starting");
    spawn_scrape_loop(scraper, interval);

    let shared = Arc::new(AppState::new(store, resolver));
    let app = routes::build_router(shared)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_any_origin());

    let addr = cfg.bind_addr()?;
    info!("cvd-daemon listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// CORS: read-only API, open to any origin.
fn cors_any_origin() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
