//! CompletionClient trait definition.
//!
//! This is the core abstraction that every completion provider implements.
//! Uses RPITIT for `complete`; `BoxCompletionClient` provides the object-safe
//! wrapper used for runtime provider selection.

use pumpforge_types::llm::{CompletionOptions, LlmError, RawCompletion};

/// Trait for completion provider backends (OpenAI, Anthropic).
///
/// Implementations live in pumpforge-infra. A call performs exactly one
/// outbound request; retries are the caller's business.
pub trait CompletionClient: Send + Sync {
    /// Provider name (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// Model used when `options.model` is empty.
    fn model(&self) -> &str;

    /// Send the prompt and return the provider's raw output unchanged.
    fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> impl std::future::Future<Output = Result<RawCompletion, LlmError>> + Send;
}
