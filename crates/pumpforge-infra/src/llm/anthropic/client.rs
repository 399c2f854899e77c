//! AnthropicClient -- [`CompletionClient`] for the Anthropic Messages API.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building request headers.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use pumpforge_core::llm::client::CompletionClient;
use pumpforge_types::llm::{
    CompletionOptions, LlmError, ProviderKind, RawCompletion, StopReason, Usage,
};

use super::types::{AnthropicErrorEnvelope, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::llm::http::{build_http_client, map_status_error, map_transport_error};

/// Anthropic Claude completion client.
///
/// Does not derive Debug so the key cannot leak through `{:?}`.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl AnthropicClient {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a client against the public Anthropic endpoint.
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_key,
            base_url: ProviderKind::Anthropic.default_base_url().to_string(),
            model,
            timeout,
        })
    }

    /// Override the base URL (proxies, local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_anthropic_request(&self, prompt: &str, options: &CompletionOptions) -> AnthropicRequest {
        let model = if options.model.is_empty() {
            self.model.clone()
        } else {
            options.model.clone()
        };

        AnthropicRequest {
            model,
            max_tokens: options.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            system: options.system.clone(),
            temperature: options.temperature,
        }
    }
}

fn map_stop_reason(reason: Option<&str>) -> StopReason {
    match reason {
        Some("max_tokens") => StopReason::MaxTokens,
        Some("stop_sequence") => StopReason::StopSequence,
        Some("refusal") => StopReason::ContentFilter,
        _ => StopReason::EndTurn,
    }
}

impl CompletionClient for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<RawCompletion, LlmError> {
        let body = self.to_anthropic_request(prompt, options);
        let url = self.url("/v1/messages");
        tracing::debug!(%url, model = %body.model, "sending Anthropic request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
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
            let message = serde_json::from_str::<AnthropicErrorEnvelope>(&error_body)
                .map(|envelope| format!("{}: {}", envelope.error.error_type, envelope.error.message))
                .unwrap_or(error_body);
            return Err(map_status_error(status, message));
        }

        let anthropic_resp: AnthropicResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.timeout)
            } else {
                LlmError::Deserialization(format!("failed to parse response: {e}"))
            }
        })?;

        Ok(RawCompletion {
            text: anthropic_resp.text(),
            stop_reason: map_stop_reason(anthropic_resp.stop_reason.as_deref()),
            usage: Usage {
                input_tokens: anthropic_resp.usage.input_tokens,
                output_tokens: anthropic_resp.usage.output_tokens,
            },
            id: anthropic_resp.id,
            model: anthropic_resp.model,
        })
    }
}
