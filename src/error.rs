//! Unified API error type for baedal-api
//!
//! `ApiError` bridges DB-layer errors (`sqlx::Error`) and the HTTP surface.
//! It enables `?` propagation in handlers without manual
//! `.map_err(|e| { tracing::error!(...); ... })` boilerplate.
//!
//! Note: a missing entity is NOT an error here. The API contract returns
//! 200 with an empty payload for valid-but-unknown ids; only files get 404.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent or empty (400)
    #[error("{0} parameter is required")]
    MissingParam(&'static str),
    /// A query parameter was present but unparsable, e.g. a non-numeric id (400)
    #[error("{0} parameter is invalid")]
    InvalidParam(&'static str),
    /// Requested photo does not exist under the photo root (404)
    #[error("photo not found")]
    PhotoNotFound,
    /// Database or pool error (auto-logged, mapped to a generic 500)
    #[error("internal server error")]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => StatusCode::BAD_REQUEST,
            Self::PhotoNotFound => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Db(ref e) = self {
            tracing::error!(error = %e, "Database error");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Convenience type alias for handler results
pub type ApiResult<T> = Result<axum::Json<T>, ApiError>;
