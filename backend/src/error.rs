use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures of the metadata storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored metadata is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is the error code the frontend reports to the user.
    #[error("NOT_FOUND")]
    NotFound,

    #[error("invalid column update: {0}")]
    InvalidUpdate(String),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::InvalidUpdate(_) => StatusCode::BAD_REQUEST,
            StoreError::Sqlite(_) | StoreError::Json(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
