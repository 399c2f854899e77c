//! Deployment port.

use pumpforge_types::deploy::DeploymentResult;
use pumpforge_types::error::GenerationError;
use pumpforge_types::token::{TokenMetadata, Tokenomics};

/// Deploys a token contract for the generated metadata.
///
/// Implementations must report `GenerationError::NotImplemented` rather
/// than fabricate an address when no real deployment backend exists.
pub trait TokenDeployer: Send + Sync {
    fn deploy(
        &self,
        metadata: &TokenMetadata,
        tokenomics: &Tokenomics,
        network: &str,
    ) -> impl std::future::Future<Output = Result<DeploymentResult, GenerationError>> + Send;
}
