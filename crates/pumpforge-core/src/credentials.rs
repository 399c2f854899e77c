//! Provider credential lookup.
//!
//! `CredentialProvider` is the port the infra layer implements (environment
//! variables in practice). `resolve_credentials` turns a lookup into a
//! `ProviderCredentials` or fails with `AuthenticationFailed` before any
//! client is built, so a missing key never reaches the network.

use secrecy::{ExposeSecret, SecretString};

use pumpforge_types::llm::{LlmError, ProviderKind};

/// Read-only source of secret values keyed by name.
pub trait CredentialProvider: Send + Sync {
    /// Returns `None` when the key is not present in this provider.
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>> + Send;
}

/// API key for the selected provider. Not `Debug`; the key never reaches logs.
pub struct ProviderCredentials {
    api_key: SecretString,
}

impl ProviderCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Exposes the key for building request headers.
    pub fn expose(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Look up the API key for `kind`.
///
/// Missing and blank keys are both authentication failures naming the
/// environment variable that should have held the key.
pub async fn resolve_credentials<P: CredentialProvider>(
    provider: &P,
    kind: ProviderKind,
) -> Result<ProviderCredentials, LlmError> {
    let key_name = kind.api_key_env();
    match provider.get(key_name).await {
        Some(value) if !value.trim().is_empty() => {
            tracing::debug!(provider = %kind, "resolved provider credentials");
            Ok(ProviderCredentials::new(value.trim()))
        }
        _ => Err(LlmError::AuthenticationFailed(format!("{key_name} is not set"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapProvider(HashMap<String, String>);

    impl MapProvider {
        fn with(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl CredentialProvider for MapProvider {
        async fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[tokio::test]
    async fn test_resolves_key_for_selected_provider() {
        let provider = MapProvider::with(&[
            ("OPENAI_API_KEY", "sk-openai"),
            ("ANTHROPIC_API_KEY", "sk-ant"),
        ]);

        let creds = resolve_credentials(&provider, ProviderKind::Anthropic)
            .await
            .unwrap();
        assert_eq!(creds.expose(), "sk-ant");

        let creds = resolve_credentials(&provider, ProviderKind::OpenAi)
            .await
            .unwrap();
        assert_eq!(creds.expose(), "sk-openai");
    }

    #[tokio::test]
    async fn test_missing_key_is_authentication_failure() {
        let provider = MapProvider::with(&[("ANTHROPIC_API_KEY", "sk-ant")]);
        let err = resolve_credentials(&provider, ProviderKind::OpenAi)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, LlmError::AuthenticationFailed(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_blank_key_is_authentication_failure() {
        let provider = MapProvider::with(&[("OPENAI_API_KEY", "   ")]);
        let result = resolve_credentials(&provider, ProviderKind::OpenAi).await;
        assert!(matches!(result, Err(LlmError::AuthenticationFailed(_))));
    }
}
