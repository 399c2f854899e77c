use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by a generation run.
///
/// Every variant is fatal for the run: the binary logs it and exits with
/// status 1.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("image generation failed: {0}")]
    Image(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenerationError {
    /// Short machine-readable kind, used in logs and JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Llm(LlmError::AuthenticationFailed(_)) => "authentication_error",
            GenerationError::Llm(LlmError::Timeout(_)) => "timeout_error",
            GenerationError::Llm(_) => "provider_error",
            GenerationError::MalformedResponse(_) => "malformed_response_error",
            GenerationError::Image(_) => "image_error",
            GenerationError::NotImplemented(_) => "not_implemented",
            GenerationError::Config(_) => "config_error",
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_generation_error_kinds() {
        let auth: GenerationError =
            LlmError::AuthenticationFailed("OPENAI_API_KEY is not set".to_string()).into();
        assert_eq!(auth.kind(), "authentication_error");

        let timeout: GenerationError = LlmError::Timeout(Duration::from_secs(1)).into();
        assert_eq!(timeout.kind(), "timeout_error");

        let provider: GenerationError = LlmError::Provider {
            status: Some(500),
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(provider.kind(), "provider_error");

        let malformed = GenerationError::MalformedResponse("missing `name`".to_string());
        assert_eq!(malformed.kind(), "malformed_response_error");
    }

    #[test]
    fn test_llm_error_display_is_transparent() {
        let err: GenerationError =
            LlmError::AuthenticationFailed("ANTHROPIC_API_KEY is not set".to_string()).into();
        assert_eq!(
            err.to_string(),
            "authentication failed: ANTHROPIC_API_KEY is not set"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");
    }
}
