//! Proxy service: the `process_url` operation
//!
//! Validates the client-supplied URL, fetches the page, runs the rewrite
//! pipeline, and hands back rewritten HTML plus the rewritten title. One
//! document per call; the service itself holds no mutable state and is
//! shared behind `Arc` across request tasks.

use thiserror::Error;
use tracing::debug;

use crate::config::ServerConfig;
use crate::fetch::{FetchError, PageFetcher};
use crate::rewrite::{rewrite_document, TermRewriter};

/// Successful result of processing one URL
#[derive(Debug, Clone)]
pub struct RewrittenPage {
    /// Rewritten document, serialized
    pub html: String,
    /// Rewritten page title
    pub title: String,
    /// URL exactly as the caller supplied it
    pub original_url: String,
}

/// Errors surfaced to the request layer, split into caller error (400)
/// and upstream failure (500).
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Failed to fetch content: {0}")]
    Fetch(FetchError),
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MissingUrl | ProxyError::InvalidUrl => 400,
            ProxyError::Fetch(_) => 500,
        }
    }
}

/// Fetch-and-rewrite orchestrator
pub struct ProxyService {
    fetcher: PageFetcher,
    rewriter: TermRewriter,
}

impl ProxyService {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(config.fetch_timeout_secs),
            rewriter: TermRewriter::new(&config.target_term, &config.replacement_term),
        }
    }

    /// Fetch `url` and return the rewritten page.
    pub async fn process_url(&self, url: &str) -> Result<RewrittenPage, ProxyError> {
        if url.trim().is_empty() {
            return Err(ProxyError::MissingUrl);
        }

        let body = self.fetcher.fetch(url).await.map_err(|e| match e {
            FetchError::InvalidUrl(_) => ProxyError::InvalidUrl,
            other => ProxyError::Fetch(other),
        })?;

        let document = rewrite_document(&body, &self.rewriter);

        debug!("Processed {}: title {:?}", url, document.title);

        Ok(RewrittenPage {
            html: document.html,
            title: document.title,
            original_url: url.to_string(),
        })
    }
}
