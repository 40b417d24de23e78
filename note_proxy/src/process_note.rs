use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use text_completion::{ChatMessage, CompletionRequest};
use tracing::*;

use crate::error::ProxyError;
use crate::models::{ErrorBody, ProcessedBody, ProcessingRequest};
use crate::AppState;

pub async fn process_note(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = body.map_err(|rejection| {
        warn!("process_note body rejected: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ProxyError::BodyTooLarge
        } else {
            ProxyError::InvalidFormat
        }
    });

    match run(&state, body).await {
        Ok(processed_content) => (
            StatusCode::OK,
            Json(ProcessedBody { processed_content }),
        )
            .into_response(),
        Err(e) => {
            error!("Error in process-note: {:?}", e);
            e.into_response()
        }
    }
}

//Each step returns early on failure, nothing reaches the provider unless
//the credential and the body are both good.
async fn run(state: &AppState, body: Result<Bytes, ProxyError>) -> Result<String, ProxyError> {
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ProxyError::Configuration)?;

    let req = ProcessingRequest::from_body(&body?)?;
    trace!("process_note prompt={} content={}", req.prompt, req.content);

    let completion = CompletionRequest {
        model: state.config.model.clone(),
        messages: vec![ChatMessage::system(req.prompt), ChatMessage::user(req.content)],
        temperature: state.config.temperature,
        max_tokens: state.config.max_tokens,
    };

    let text = state
        .completion
        .complete(api_key, completion)
        .await?
        .ok_or(ProxyError::NoResponse)?;

    debug!("process_note done, {} chars", text.len());
    Ok(text)
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method Not Allowed".to_string(),
        }),
    )
        .into_response()
}
