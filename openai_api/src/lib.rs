//! A library for calling OpenAI's chat completion API.
//!
//! This crate provides an `OpenAIHandler` struct that implements
//! `text_completion::CompletionHandler` with a single request per call.

mod models;
mod run_completion;
pub use run_completion::run_completion;

use async_trait::async_trait;
use text_completion::{CompletionError, CompletionHandler, CompletionRequest};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct OpenAIHandler {
    pub api_base: String,
    client: reqwest::Client,
}

impl OpenAIHandler {
    pub fn new(api_base: impl Into<String>) -> Self {
        OpenAIHandler {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            //Reused for every request, the client keeps a connection pool.
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionHandler for OpenAIHandler {
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        run_completion(&self.client, &self.api_base, api_key, &request).await
    }
}
