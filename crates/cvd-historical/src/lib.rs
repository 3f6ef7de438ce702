//! cvd-historical
//!
//! The historical time-series core: recovered-series alignment, snapshot
//! building and the query engine behind `/historical`.
//!
//! Everything here is synchronous and allocation-local. Fetching the CSV text
//! and persisting the snapshot belong to the scraper; serving belongs to the
//! daemon.

pub mod align;
pub mod batch;
pub mod build;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod rows;
pub mod window;

pub use align::{align_recovered, AlignedRow};
pub use batch::{country_request, CountryResponse, HistoricalLookup, NOT_FOUND_MESSAGE};
pub use build::build_snapshot;
pub use error::{BuildError, DataShapeError};
pub use pipeline::{build_from_csv, SeriesDocuments};
pub use query::{historical_all, historical_country, historical_data, MAINLAND};
pub use rows::{parse_count, time_series_rows, Metric, TimeSeriesRow, METADATA_COLUMNS};
pub use window::{LastDays, DEFAULT_LAST_DAYS};
