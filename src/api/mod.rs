//! HTTP API for the proxy

pub mod errors;
pub mod server;

pub use errors::{ApiErrorResponse, ErrorResponse, FetchRequest, FetchResponse};
pub use server::{build_router, start_server};
