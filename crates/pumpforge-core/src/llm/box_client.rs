//! BoxCompletionClient -- object-safe dynamic dispatch wrapper for CompletionClient.
//!
//! 1. Define an object-safe `CompletionClientDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionClientDyn` for all `T: CompletionClient`
//! 3. `BoxCompletionClient` wraps `Box<dyn CompletionClientDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use pumpforge_types::llm::{CompletionOptions, LlmError, RawCompletion};

use super::client::CompletionClient;

/// Object-safe version of [`CompletionClient`] with boxed futures.
pub trait CompletionClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a CompletionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<RawCompletion, LlmError>> + Send + 'a>>;
}

impl<T: CompletionClient> CompletionClientDyn for T {
    fn name(&self) -> &str {
        CompletionClient::name(self)
    }

    fn model(&self) -> &str {
        CompletionClient::model(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a CompletionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<RawCompletion, LlmError>> + Send + 'a>> {
        Box::pin(self.complete(prompt, options))
    }
}

/// Type-erased completion client, chosen at runtime from configuration.
///
/// `CompletionClient` uses RPITIT and cannot be a trait object directly, so
/// this wrapper delegates to `CompletionClientDyn`. It also implements
/// `CompletionClient` itself, which lets the pipeline stay generic.
pub struct BoxCompletionClient {
    inner: Box<dyn CompletionClientDyn + Send + Sync>,
}

impl BoxCompletionClient {
    /// Wrap a concrete `CompletionClient` in a type-erased box.
    pub fn new<T: CompletionClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }
}

impl CompletionClient for BoxCompletionClient {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<RawCompletion, LlmError> {
        self.inner.complete_boxed(prompt, options).await
    }
}
