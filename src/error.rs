use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failures while resolving a base price from the configured source.
///
/// None of these are fatal: the resolver still hands back a fallback price
/// and the error only travels along for status display.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Sheet settings are incomplete: {field} is empty")]
    Configuration { field: &'static str },

    #[error("Sheet request failed with HTTP status {status}")]
    Http { status: u16 },

    #[error("Sheet returned no rows")]
    NoData,

    #[error("Sheet request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Sheet response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in your name to confirm booking")]
    MissingName,

    #[error("Please fill in your email to confirm booking")]
    MissingEmail,

    #[error("Please calculate the price before confirming")]
    NoQuote,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
