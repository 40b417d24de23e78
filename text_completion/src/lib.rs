//! An interface for handling text completion requests
//!
//! This crate provides a `CompletionHandler` trait that the HTTP layer calls
//! to turn a prompt and some content into generated text, without knowing
//! which provider answers it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One chat-style completion call: ordered messages plus sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Failure of a completion call, tagged where it happens.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    /// The provider rejected or never got a usable credential.
    #[error("API key rejected: {0}")]
    Configuration(String),

    /// Any other provider or transport failure. The message is shown to callers as is.
    #[error("{0}")]
    Upstream(String),
}

#[async_trait]
pub trait CompletionHandler {
    /// Returns the text of the first candidate, or `None` when the provider
    /// answered without any usable text.
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<Option<String>, CompletionError>;
}
