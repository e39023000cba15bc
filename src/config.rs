//! Server configuration
//!
//! Loaded from environment variables with sensible defaults; validated once
//! at startup before any component is constructed.

use std::env;

/// Configuration for the proxy server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to (default: 3001)
    pub port: u16,
    /// Per-request fetch timeout in seconds (default: 10)
    pub fetch_timeout_secs: u64,
    /// Word being searched for in fetched pages (default: "Yale")
    pub target_term: String,
    /// Word substituted for the target (default: "Fale")
    pub replacement_term: String,
    /// Directory holding the static front-end (default: "public")
    pub public_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            target_term: env::var("TARGET_TERM").unwrap_or_else(|_| "Yale".to_string()),
            replacement_term: env::var("REPLACEMENT_TERM").unwrap_or_else(|_| "Fale".to_string()),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.target_term.trim().is_empty() {
            return Err("target_term must not be empty".to_string());
        }
        if self.replacement_term.trim().is_empty() {
            return Err("replacement_term must not be empty".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            fetch_timeout_secs: 10,
            target_term: "Yale".to_string(),
            replacement_term: "Fale".to_string(),
            public_dir: "public".to_string(),
        }
    }
}
