//! Deployment stand-in.

use pumpforge_core::deploy::TokenDeployer;
use pumpforge_types::deploy::DeploymentResult;
use pumpforge_types::error::GenerationError;
use pumpforge_types::token::{TokenMetadata, Tokenomics};

/// Deployer used until a real chain backend exists. Every call fails with
/// `NotImplemented`; it never invents an address.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedDeployer;

impl TokenDeployer for UnimplementedDeployer {
    async fn deploy(
        &self,
        metadata: &TokenMetadata,
        tokenomics: &Tokenomics,
        network: &str,
    ) -> Result<DeploymentResult, GenerationError> {
        tracing::warn!(
            symbol = %metadata.symbol,
            total_supply = %tokenomics.total_supply,
            network,
            "token deployment requested but no deployment backend is available"
        );
        Err(GenerationError::NotImplemented(format!(
            "token deployment to {network}"
        )))
    }
}
