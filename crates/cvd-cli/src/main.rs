use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "cvd")]
#[command(about = "COVID-19 data service CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> env -> local...)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Build a historical snapshot from local CSV files and print a query result
    Historical {
        /// time_series_covid19_confirmed_global.csv
        #[arg(long)]
        cases: PathBuf,

        /// time_series_covid19_deaths_global.csv
        #[arg(long)]
        deaths: PathBuf,

        /// time_series_covid19_recovered_global.csv
        #[arg(long)]
        recovered: PathBuf,

        /// Trailing window: a day count or "all" (default 30)
        #[arg(long)]
        lastdays: Option<String>,

        /// Country query (name, iso2, iso3 or id; comma/pipe separated for several)
        #[arg(long, conflicts_with = "global")]
        country: Option<String>,

        /// Province of --country (comma/pipe separated for several)
        #[arg(long, requires = "country")]
        province: Option<String>,

        /// Print the global sum instead of per-location series
        #[arg(long, default_value_t = false)]
        global: bool,
    },

    /// Run one scrape cycle against the configured upstreams and report counts
    ScrapeOnce,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::ConfigHash { paths } => {
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = cvd_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }

        Commands::Historical {
            cases,
            deaths,
            recovered,
            lastdays,
            country,
            province,
            global,
        } => {
            let query = commands::historical::HistoricalQuery {
                lastdays,
                country,
                province,
                global,
            };
            let out = commands::historical::run(&cases, &deaths, &recovered, &query)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        Commands::ScrapeOnce => {
            init_tracing();
            let report = commands::scrape::run_once().await?;
            println!("cycle_id={}", report.cycle_id);
            println!("historical_locations={}", count(report.historical));
            println!("jhu_locations={}", count(report.jhu_locations));
            println!("worldometers_countries={}", count(report.worldometers));
            if !report.is_complete() {
                anyhow::bail!("scrape cycle incomplete; see log for the failing job");
            }
        }
    }

    Ok(())
}

fn count(n: Option<usize>) -> String {
    n.map_or_else(|| "FAILED".to_string(), |n| n.to_string())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
