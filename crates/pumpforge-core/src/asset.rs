//! Image generator port.

use std::path::PathBuf;

use pumpforge_types::error::GenerationError;

/// Produces placeholder artwork for a token and reports where it was written.
///
/// The only input is the token name; implementations live in pumpforge-infra.
pub trait ImageGenerator: Send + Sync {
    fn generate(
        &self,
        token_name: &str,
    ) -> impl std::future::Future<Output = Result<PathBuf, GenerationError>> + Send;
}
