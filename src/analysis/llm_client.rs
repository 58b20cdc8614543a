// src/analysis/llm_client.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::environment::LlmSettings;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("LLM API key not configured")]
    MissingApiKey,
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("LLM API returned error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("LLM API returned no choices")]
    EmptyResponse,
}

/// Source of generated text for a prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_new_tokens,
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
            stream: false,
        };

        info!("Sending completion request to model {}", self.settings.model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("LLM API error {}: {}", status, body);
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
