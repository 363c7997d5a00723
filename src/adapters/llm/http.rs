//! HTTP completion backend
//!
//! Posts chat-completion requests with `reqwest` on a private current-thread
//! `tokio` runtime, so callers stay synchronous. Each call is bounded by the
//! configured timeout; there are no retries.

use std::time::Duration;

use super::{ChatRequest, ChatResponse, CompletionBackend, LlmError};
use crate::config::ClassifierConfig;

/// Completion backend talking to an OpenAI-compatible endpoint
#[derive(Debug)]
pub struct HttpCompletion {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl HttpCompletion {
    /// Build the backend from classifier settings
    ///
    /// The API key is read from the configured environment variable once,
    /// here. A missing key is not an error: every call then fails and the
    /// classifier answers from the static table.
    pub fn from_config(config: &ClassifierConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let api_key = std::env::var(&config.api_key_env).ok().filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            log::warn!(
                "{} is not set; remote classification will fall back to the static table",
                config.api_key_env
            );
        }

        Ok(Self {
            client,
            runtime,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        })
    }
}

impl CompletionBackend for HttpCompletion {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingApiKey(self.api_key_env.clone()))?;
        let body = ChatRequest::single(&self.model, prompt);

        self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(key)
                .json(&body)
                .send()
                .await
                .map_err(|e| LlmError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LlmError::Status(status.as_u16()));
            }

            let parsed: ChatResponse =
                response.json().await.map_err(|e| LlmError::Transport(e.to_string()))?;
            parsed.into_text()
        })
    }
}
