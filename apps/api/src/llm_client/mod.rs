/// LLM Client: the single point of entry for chat-completion calls.
///
/// Every other module talks to the model through the `CompletionClient`
/// trait; `ChatCompletionClient` is the production implementation for any
/// OpenAI-compatible `/chat/completions` endpoint (Groq by default).
///
/// No retries: a failed call is reported once, with its raw payload, and the
/// caller decides what to show instead.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::CompletionConfig;

/// Any way a completion can fail. Every variant keeps the raw diagnostic
/// payload so it can be logged verbatim.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("completion endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion payload ({reason}): {body}")]
    MalformedPayload { reason: String, body: String },
}

impl GenerationError {
    /// The raw response body (or transport message) behind this error.
    pub fn raw_payload(&self) -> &str {
        match self {
            GenerationError::Transport { message } => message,
            GenerationError::Status { body, .. } => body,
            GenerationError::MalformedPayload { body, .. } => body,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Transport {
            message: e.to_string(),
        }
    }
}

/// Text completion seam. `AppState` carries it as `Arc<dyn CompletionClient>`
/// so tests can script responses.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct ChatCompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl ChatCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_completion(&body)?;
        debug!(
            "Completion succeeded: model={}, chars={}",
            self.config.model,
            text.len()
        );
        Ok(text)
    }
}

/// Extracts `choices[0].message.content` from a chat-completion body and
/// trims it. Any other shape is a `MalformedPayload` carrying the body.
pub fn parse_completion(body: &str) -> Result<String, GenerationError> {
    let malformed = |reason: String| GenerationError::MalformedPayload {
        reason,
        body: body.to_string(),
    };

    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| malformed(format!("invalid JSON: {e}")))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| malformed("no choices".to_string()))?;

    choice
        .message
        .content
        .map(|content| content.trim().to_string())
        .ok_or_else(|| malformed("choice has no message content".to_string()))
}
