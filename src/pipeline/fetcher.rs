//! HTTP fetcher
//!
//! One blocking-style GET per call, no internal retry: the retry budget is
//! owned by the controller. Transport failures are classified so the caller
//! can log something meaningful, but every variant is recoverable.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// A classified transport failure for a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Request failed for {url}: {source}")]
    Other { url: String, source: reqwest::Error },
}

/// Builds the HTTP client used for page fetches
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format!("apptrack/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text.
///
/// Any non-success status is an error; redirects follow the client's
/// default policy.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return Err(if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else if e.is_connect() {
                FetchError::Connect {
                    url: url.to_string(),
                }
            } else {
                FetchError::Other {
                    url: url.to_string(),
                    source: e,
                }
            });
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })
}
