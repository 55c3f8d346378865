//! OpenAiGenerator - Direct REST API implementation for OpenAI GPT.
//!
//! Calls the OpenAI Chat Completions API directly. Configuration comes
//! from environment variables; without a credential, callers should fall
//! back to the static response table instead of constructing this.

use crate::{GeneratorError, ResponseGenerator};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Generator implementation that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAiGenerator {
    /// Creates a new generator with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: None,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL_NAME` defaults to
    /// `gpt-4o`.
    pub fn try_from_env() -> Result<Self, GeneratorError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            GeneratorError::Configuration(
                "OPENAI_API_KEY not found in environment variables".into(),
            )
        })?;

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    async fn send_request(&self, body: &ChatRequest) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(BASE_URL)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| GeneratorError::Process {
                status_code: None,
                message: format!("OpenAI API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatResponse = response.json().await.map_err(|err| {
            GeneratorError::ExecutionFailed(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    fn describe(&self) -> &str {
        "OpenAI chat-completions generator"
    }

    async fn generate(
        &self,
        instructions: &str,
        conversation: &str,
        session_id: &str,
    ) -> Result<String, GeneratorError> {
        debug!(session_id, model = %self.model, "dispatching generator request");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: instructions.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: conversation.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
        };

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatResponse) -> Result<String, GeneratorError> {
    response
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            GeneratorError::ExecutionFailed(
                "OpenAI API returned no text in the response choices".into(),
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> GeneratorError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    GeneratorError::Process {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
    }
}
