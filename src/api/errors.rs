//! Wire types for the `/fetch` endpoint

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::service::ProxyError;

/// Request body for `POST /fetch`
#[derive(Debug, Clone, Deserialize)]
pub struct FetchRequest {
    /// Absolute or scheme-less URL to fetch and rewrite
    #[serde(default)]
    pub url: String,
}

/// Success envelope for `POST /fetch`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub success: bool,
    /// Rewritten HTML document
    pub content: String,
    /// Rewritten page title
    pub title: String,
    /// URL exactly as the client supplied it
    pub original_url: String,
}

/// Error envelope shared by all failure paths
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Maps a `ProxyError` onto its HTTP status and JSON envelope
pub struct ApiErrorResponse(pub ProxyError);

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            success: false,
            error: self.0.to_string(),
        };

        (status, axum::response::Json(body)).into_response()
    }
}
