//! OpenAI chat completions client.
//!
//! Talks to any endpoint that speaks the OpenAI `/chat/completions` shape
//! (OpenAI itself, or a compatible proxy via `base_url`). A call is exactly
//! one HTTP request; nothing here retries.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use pumpforge_core::llm::client::CompletionClient;
use pumpforge_types::llm::{
    CompletionOptions, LlmError, ProviderKind, RawCompletion, StopReason, Usage,
};

use self::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAiErrorEnvelope};
use crate::llm::http::{build_http_client, map_status_error, map_transport_error};

/// OpenAI-compatible completion client.
///
/// Does not derive Debug, same as [`super::anthropic::AnthropicClient`].
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    /// Create a client against `https://api.openai.com/v1`.
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_key,
            base_url: ProviderKind::OpenAi.default_base_url().to_string(),
            model,
            timeout,
        })
    }

    /// Override the base URL (proxies, local test servers). Includes the
    /// version segment, e.g. `https://api.openai.com/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build_request(&self, prompt: &str, options: &CompletionOptions) -> ChatCompletionRequest {
        let model = if options.model.is_empty() {
            self.model.clone()
        } else {
            options.model.clone()
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &options.system {
            messages.push(ChatMessage::new("system", system.clone()));
        }
        messages.push(ChatMessage::new("user", prompt));

        ChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: options.max_tokens,
            temperature: options.temperature,
        }
    }
}

fn map_finish_reason(reason: Option<&str>) -> StopReason {
    match reason {
        Some("length") => StopReason::MaxTokens,
        Some("content_filter") => StopReason::ContentFilter,
        _ => StopReason::EndTurn,
    }
}

impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<RawCompletion, LlmError> {
        let body = self.build_request(prompt, options);
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(%url, model = %body.model, "sending OpenAI request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .map_err(|e| map_transport_error(e, self.timeout))?;
            let message = serde_json::from_str::<OpenAiErrorEnvelope>(&error_body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_body);
            return Err(map_status_error(status, message));
        }

        let oai_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.timeout)
            } else {
                LlmError::Deserialization(format!("failed to parse response: {e}"))
            }
        })?;

        let choice = oai_response.choices.into_iter().next().ok_or_else(|| {
            LlmError::Deserialization("response contained no choices".to_string())
        })?;

        let usage = oai_response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(RawCompletion {
            id: oai_response.id,
            text: choice.message.content.unwrap_or_default(),
            model: oai_response.model,
            stop_reason: map_finish_reason(choice.finish_reason.as_deref()),
            usage,
        })
    }
}
