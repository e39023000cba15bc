//! HTTP page fetching
//!
//! Retrieves raw page text for a client-supplied URL. URLs without a scheme
//! default to `https://` before validation. The body of any 2xx response is
//! consumed as text regardless of declared content type; non-HTML bodies
//! simply yield no substitutions downstream.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 Faleproxy/1.0";
const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Fetch error taxonomy: bad input (`InvalidUrl`) is distinguishable from
/// upstream failures (everything else).
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL failed to parse after scheme normalization
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request timed out
    #[error("timeout fetching {0}")]
    Timeout(String),

    /// Upstream answered with a non-success status
    #[error("HTTP {0} for {1}")]
    HttpStatus(u16, String),

    /// Transport-level request error (DNS, refusal, TLS, body read)
    #[error("{0}")]
    Request(String),
}

/// Page fetcher backed by a shared reqwest client
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the given per-request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Prefix `https://` when the URL carries no scheme.
    pub fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    /// Fetch the raw body text for `url`.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let normalized = Self::normalize_url(url);
        let parsed =
            Url::parse(&normalized).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        debug!("Fetching page: {}", parsed);

        let response = self.client.get(parsed.clone()).send().await.map_err(|e| {
            warn!("Fetch failed for {}: {}", parsed, e);
            if e.is_timeout() {
                FetchError::Timeout(normalized.clone())
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, parsed);
            return Err(FetchError::HttpStatus(status.as_u16(), normalized));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        info!("Fetched {} bytes from {}", body.len(), parsed);

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(
            PageFetcher::normalize_url("example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(
            PageFetcher::normalize_url("http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            PageFetcher::normalize_url("https://example.com"),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let fetcher = PageFetcher::new(5);
        let result = fetcher.fetch("https://not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetcher_creation() {
        let _fetcher = PageFetcher::new(10);
    }
}
