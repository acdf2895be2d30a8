use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: rand_int_max ({max}) must be greater than rand_int_min ({min})")]
    InvalidRandRange { min: i64, max: i64 },

    #[error("invalid configuration: time_format_custom {0:?} is not a valid strftime pattern")]
    InvalidTimeFormat(String),

    #[error("Directive error on line {line}: {message}")]
    Directive { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No placeholder replacer attached to the request")]
    MissingReplacer,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn directive(line: usize, message: impl Into<String>) -> Self {
        Self::Directive {
            line,
            message: message.into(),
        }
    }

    /// Errors that must stop the server from starting
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::InvalidRandRange { .. }
                | AppError::InvalidTimeFormat(_)
                | AppError::Directive { .. }
        )
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let log_message = self.to_string();
        let (status, code, public_message) = match &self {
            AppError::Config(_)
            | AppError::InvalidRandRange { .. }
            | AppError::InvalidTimeFormat(_)
            | AppError::Directive { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Configuration error",
            ),
            AppError::MissingReplacer | AppError::Internal(_) | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        };

        let client_message = if is_production() {
            public_message.to_string()
        } else {
            log_message.clone()
        };

        // Always log the detailed error server-side
        tracing::error!(
            code = %code,
            status = %status.as_u16(),
            message = %log_message,
            "Request failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
