use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use text_completion::CompletionError;
use thiserror::Error;

use crate::models::ErrorBody;

/// Every way a note can fail to be processed. `Display` is the exact text
/// sent back to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ProxyError {
    #[error("API configuration error")]
    Configuration,

    #[error("Invalid request format")]
    InvalidFormat,

    #[error("Note is too large to process")]
    BodyTooLarge,

    #[error("Content and prompt are required")]
    MissingFields,

    #[error("No response from OpenAI")]
    NoResponse,

    #[error("{0}")]
    Upstream(String),
}

impl ProxyError {
    /// Always 500. Existing callers only look at the `error` text, so
    /// validation and provider failures are not told apart by status.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<CompletionError> for ProxyError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Configuration(_) => ProxyError::Configuration,
            CompletionError::Upstream(msg) if msg.contains("JSON") => ProxyError::InvalidFormat,
            CompletionError::Upstream(msg) => ProxyError::Upstream(msg),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_errors_are_remapped() {
        assert_eq!(
            ProxyError::from(CompletionError::Configuration("Incorrect API key".to_string())),
            ProxyError::Configuration
        );
        assert_eq!(
            ProxyError::from(CompletionError::Upstream("Unexpected JSON token".to_string())),
            ProxyError::InvalidFormat
        );
        assert_eq!(
            ProxyError::from(CompletionError::Upstream("Rate limit reached".to_string())).to_string(),
            "Rate limit reached"
        );
    }

    #[test]
    fn test_every_error_is_internal_server_error() {
        for err in [
            ProxyError::Configuration,
            ProxyError::InvalidFormat,
            ProxyError::BodyTooLarge,
            ProxyError::MissingFields,
            ProxyError::NoResponse,
            ProxyError::Upstream("x".to_string()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
