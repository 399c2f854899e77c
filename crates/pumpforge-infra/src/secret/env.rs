//! Environment variable credential provider.
//!
//! Looks up the key name directly (e.g., `OPENAI_API_KEY`). Values that are
//! not valid Unicode count as absent.

use pumpforge_core::credentials::CredentialProvider;

/// Read-only credential provider backed by the process environment.
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    async fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "environment variable is not valid Unicode; ignoring");
                None
            }
        }
    }
}
