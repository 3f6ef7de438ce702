//! cvd-sources
//!
//! Upstream collaborators of the scraper: fetching text over HTTP, turning
//! CSV into header-keyed rows, scanning HTML tables, and resolving country
//! labels to a canonical identity. Nothing here touches the cache.

pub mod countries;
pub mod fetch;
pub mod html;
pub mod table;
pub mod text;

pub use countries::{CountryRecord, CountryResolver, CountryTable};
pub use fetch::{join_url, CsvFetcher, FetchError, HttpFetcher};
pub use table::{parse_csv, parse_records, CsvError, CsvTable, RowView};
pub use text::{split_query, words_standardize};
