//! Faleproxy: fetches a remote HTML page and serves a copy in which every
//! case-preserving whole-word occurrence of a target term is replaced with
//! a replacement term, leaving URLs, attributes, and markup untouched.

pub mod api;
pub mod config;
pub mod fetch;
pub mod rewrite;
pub mod service;

pub use config::ServerConfig;
pub use fetch::{FetchError, PageFetcher};
pub use rewrite::{rewrite_document, RewrittenDocument, TermRewriter};
pub use service::{ProxyError, ProxyService, RewrittenPage};
