use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown when a fact-check is requested while `GEMINI_API_KEY` is unset.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "API Key not found. Please set the GEMINI_API_KEY environment variable.";

/// Shown when the submitted claim is empty or whitespace only.
pub const EMPTY_CLAIM_MESSAGE: &str = "Please enter some text to check.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Remote call failures are not represented here; the invoker folds them into
/// `CheckResult::Failed`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn missing_credential() -> Self {
        AppError::Configuration(MISSING_CREDENTIAL_MESSAGE.to_string())
    }

    pub fn empty_claim() -> Self {
        AppError::Validation(EMPTY_CLAIM_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message intended for the person at the keyboard.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Configuration(msg) | AppError::Validation(msg) | AppError::NotFound(msg) => {
                msg
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                "CONFIGURATION_ERROR"
            }
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (self.status_code(), body).into_response()
    }
}
