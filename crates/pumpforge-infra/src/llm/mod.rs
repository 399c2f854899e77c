//! Completion client implementations.
//!
//! Concrete [`CompletionClient`](pumpforge_core::llm::client::CompletionClient)
//! implementations for OpenAI and Anthropic, plus the factory
//! ([`create_client`]) that picks one from configuration.

pub mod anthropic;
pub mod http;
pub mod openai_compat;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Duration;

use secrecy::SecretString;

use pumpforge_core::credentials::ProviderCredentials;
use pumpforge_core::llm::box_client::BoxCompletionClient;
use pumpforge_types::config::ForgeConfig;
use pumpforge_types::llm::{LlmError, ProviderKind};

use self::anthropic::AnthropicClient;
use self::openai_compat::OpenAiClient;

/// Create a [`BoxCompletionClient`] for the provider named in `config`.
///
/// Credentials are resolved by the caller beforehand, so a missing key has
/// already failed before this point.
pub fn create_client(
    config: &ForgeConfig,
    credentials: &ProviderCredentials,
) -> Result<BoxCompletionClient, LlmError> {
    let api_key = SecretString::from(credentials.expose().to_string());
    let model = config.resolved_model();
    let base_url = config.resolved_base_url();
    let timeout = Duration::from_secs(config.timeout_secs);

    tracing::debug!(
        provider = %config.provider,
        %model,
        %base_url,
        timeout_secs = config.timeout_secs,
        "creating completion client"
    );

    match config.provider {
        ProviderKind::OpenAi => {
            let client = OpenAiClient::new(api_key, model, timeout)?.with_base_url(base_url);
            Ok(BoxCompletionClient::new(client))
        }
        ProviderKind::Anthropic => {
            let client = AnthropicClient::new(api_key, model, timeout)?.with_base_url(base_url);
            Ok(BoxCompletionClient::new(client))
        }
    }
}
