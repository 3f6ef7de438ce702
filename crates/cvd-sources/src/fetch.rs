//! Fetch boundary for upstream CSV / page content.
//!
//! [`CsvFetcher`] is the seam the scraper depends on; [`HttpFetcher`] is the
//! reqwest-backed implementation. Tests substitute an in-memory fetcher.

use std::fmt;
use std::time::Duration;

use tracing::debug;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Network failure while fetching upstream content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// Connection, TLS, timeout or body-read failure.
    Transport { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { url, status } => {
                write!(f, "network error: GET {url} returned status {status}")
            }
            FetchError::Transport { url, message } => {
                write!(f, "network error: GET {url} failed: {message}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

// ---------------------------------------------------------------------------
// Fetcher trait
// ---------------------------------------------------------------------------

#[async_trait::async_trait]
pub trait CsvFetcher: Send + Sync {
    /// Short name for logs (e.g. `"http"`).
    fn source_name(&self) -> &'static str;

    /// GET `url` and return the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cvd/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                message: format!("http client build failed: {e}"),
            })?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl CsvFetcher for HttpFetcher {
    fn source_name(&self) -> &'static str {
        "http"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching upstream content");

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let resp = self.http.get(url).send().await.map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(transport)
    }
}

/// Join a directory URL and a file name with exactly one `/`.
pub fn join_url(base: &str, file: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(join_url("http://h/dir/", "/a.csv"), "http://h/dir/a.csv");
        assert_eq!(join_url("http://h/dir", "a.csv"), "http://h/dir/a.csv");
    }

    #[test]
    fn fetch_error_display_status() {
        let e = FetchError::Status {
            url: "http://h/a.csv".into(),
            status: 404,
        };
        assert_eq!(e.to_string(), "network error: GET http://h/a.csv returned status 404");
        assert_eq!(e.url(), "http://h/a.csv");
    }

    #[test]
    fn fetcher_is_object_safe() {
        let f = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let _boxed: Box<dyn CsvFetcher> = Box::new(f);
    }
}
