//! Client side of note processing.
//!
//! `NoteClient::process_note` posts a note and a prompt to the processing
//! endpoint and returns the generated text. Every failure comes back as a
//! `ClientError` whose message can be shown to a user as is.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::*;

pub const API_PATH: &str = "/.netlify/functions/process-note";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub content: String,
    pub prompt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub processed_content: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx answer, with the server's `error` text when it sent one.
    #[error("{0}")]
    Request(String),

    #[error("Invalid response format: missing processedContent")]
    MalformedResponse,

    /// Transport or decoding failure.
    #[error("Failed to process note. Please try again.")]
    Generic,
}

#[derive(Clone, Debug)]
pub struct NoteClient {
    endpoint: String,
    client: reqwest::Client,
}

impl NoteClient {
    /// `base_url` is the origin serving the endpoint, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        NoteClient {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), API_PATH),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn process_note(
        &self,
        options: &ProcessingOptions,
    ) -> Result<ProcessingResult, ClientError> {
        self.send(options).await.inspect_err(|e| {
            error!("API Error: {} endpoint={}", e, self.endpoint);
        })
    }

    async fn send(&self, options: &ProcessingOptions) -> Result<ProcessingResult, ClientError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(options)
            .send()
            .await
            .map_err(|e| {
                debug!("process_note transport error: {}", e);
                ClientError::Generic
            })?;

        let status = resp.status();
        //Parsed whatever the status, error answers carry `{error}` too.
        let data: Value = resp.json().await.map_err(|e| {
            debug!("process_note unreadable body status={}: {}", status, e);
            ClientError::Generic
        })?;

        if !status.is_success() {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(ClientError::Request(message));
        }

        data.get("processedContent")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(|text| ProcessingResult {
                processed_content: text.to_string(),
            })
            .ok_or(ClientError::MalformedResponse)
    }
}
