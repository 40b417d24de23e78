//! HTTP front for note processing.
//!
//! Exposes one endpoint that takes `{content, prompt}`, asks a
//! `CompletionHandler` to apply the prompt to the content, and answers
//! `{processedContent}` or `{error}`. Every response carries the same
//! permissive CORS headers so that browser clients can call it directly.

mod config;
mod error;
mod models;
mod process_note;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use models::{ErrorBody, ProcessedBody, ProcessingRequest};

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue};
use axum::routing::post;
use axum::Router;
use text_completion::CompletionHandler;
use tower_http::set_header::SetResponseHeaderLayer;

pub const PROCESS_NOTE_PATH: &str = "/.netlify/functions/process-note";

/// Largest accepted request body, the same as the serverless hosting limit.
pub const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

// Set on every response, preflight and errors included.
fn cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ),
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ),
    ]
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub completion: Arc<dyn CompletionHandler + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: ProxyConfig,
        completion: Arc<dyn CompletionHandler + Send + Sync + 'static>,
    ) -> Self {
        AppState {
            config: Arc::new(config),
            completion,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let route = post(process_note::process_note)
        .options(process_note::preflight)
        .fallback(process_note::method_not_allowed);

    let mut router = Router::new()
        .route(PROCESS_NOTE_PATH, route)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state);

    for (name, value) in cors_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }
    router
}
