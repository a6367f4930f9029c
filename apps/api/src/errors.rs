use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::intent::parser::IntentParseError;

pub const EXTRACTION_FAILED_MESSAGE: &str =
    "The intent extraction service is unavailable. Please try again later.";
pub const INTENT_PARSE_FAILED_MESSAGE: &str =
    "Failed to extract intent. Please rephrase your query.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction service error: {0}")]
    ExtractionService(String),

    /// Carries the reply that failed to parse so the page can show it.
    #[error("Intent parse error: {source}")]
    IntentParse {
        #[source]
        source: IntentParseError,
        raw_reply: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message shown to an end user. Never carries upstream details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::ExtractionService(_) => EXTRACTION_FAILED_MESSAGE.to_string(),
            AppError::IntentParse { .. } => INTENT_PARSE_FAILED_MESSAGE.to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }

    pub(crate) fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::ExtractionService(_) => (StatusCode::BAD_GATEWAY, "EXTRACTION_SERVICE_ERROR"),
            AppError::IntentParse { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "INTENT_PARSE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// The extractor reply behind a parse failure, if any.
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            AppError::IntentParse { raw_reply, .. } => Some(raw_reply.as_str()),
            _ => None,
        }
    }

    /// Logs server-side failures. Client mistakes are not logged.
    pub fn log(&self) {
        match self {
            AppError::ExtractionService(msg) => tracing::error!("Extraction service error: {msg}"),
            AppError::IntentParse { source, .. } => tracing::warn!("Intent parse error: {source}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::Validation(_) => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code) = self.status_and_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_maps_to_rephrase_message() {
        let err = AppError::IntentParse {
            source: IntentParseError::TooFewLines { found: 2 },
            raw_reply: "job_role: Analyst\nrequired_skills: SQL".to_string(),
        };
        assert_eq!(err.user_message(), INTENT_PARSE_FAILED_MESSAGE);
        assert_eq!(err.raw_reply(), Some("job_role: Analyst\nrequired_skills: SQL"));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_extraction_error_hides_upstream_details() {
        let err = AppError::ExtractionService("API error (status 403): key revoked".to_string());
        assert!(!err.user_message().contains("key revoked"));
        assert_eq!(err.raw_reply(), None);
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = AppError::Validation("query cannot be empty".to_string());
        assert_eq!(err.user_message(), "query cannot be empty");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
