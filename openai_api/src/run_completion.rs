use reqwest::StatusCode;
use text_completion::{CompletionError, CompletionRequest};
use tracing::*;

use crate::models::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};

//Transport and decoding details stay in the logs, callers get these.
const CONNECTION_ERROR: &str = "Connection error.";
const UNREADABLE_RESPONSE: &str = "Unreadable response from OpenAI";

pub async fn run_completion(
    client: &reqwest::Client,
    api_base: &str,
    api_key: &str,
    req: &CompletionRequest,
) -> Result<Option<String>, CompletionError> {
    let url = format!("{}/chat/completions", api_base);
    trace!("POST {} model={} messages={:?}", url, req.model, req.messages);

    let resp = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&ChatCompletionRequest {
            model: &req.model,
            messages: &req.messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        })
        .send()
        .await
        .map_err(|e| {
            warn!("POST {} failed: {}", url, e);
            CompletionError::Upstream(CONNECTION_ERROR.to_string())
        })?;

    let status = resp.status();
    trace!("POST {} status={}", url, status);

    if !status.is_success() {
        let err_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(classify_failure(status, &err_text));
    }

    let data: ChatCompletionResponse = resp.json().await.map_err(|e| {
        warn!("POST {} unreadable completion: {}", url, e);
        CompletionError::Upstream(UNREADABLE_RESPONSE.to_string())
    })?;

    let text = data.first_text();
    debug!("run_completion model={} result={:?}", req.model, text);
    Ok(text)
}

/// Tags a non-2xx provider answer. Credential problems become `Configuration`,
/// everything else keeps the provider's own message.
fn classify_failure(status: StatusCode, body: &str) -> CompletionError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("{} status code", status.as_u16()));

    if status == StatusCode::UNAUTHORIZED || message.contains("API key") {
        warn!("completion rejected credential status={} message={}", status, message);
        CompletionError::Configuration(message)
    } else {
        warn!("completion failed status={} message={}", status, message);
        CompletionError::Upstream(message)
    }
}
