use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use catalog::errors::CatalogError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown id on a single-resource lookup. Maps to 404, never a crash.
    #[error("not found")]
    NotFound,
    /// The storage layer failed mid-request; propagated unmodified.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Db(msg) => ApiError::Storage(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(msg) => {
                error!(error = %msg, "storage fault while serving request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let msg = self.to_string();
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
