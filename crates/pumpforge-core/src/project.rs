//! Contract and branding ports.
//!
//! Like deployment, these steps run only when enabled in configuration.
//! Implementations without a real backend report
//! `GenerationError::NotImplemented` instead of returning placeholder data.

use pumpforge_types::error::GenerationError;
use pumpforge_types::project::{BrandingKit, ContractArtifact};
use pumpforge_types::token::{TokenMetadata, Tokenomics};

/// Produces smart-contract source for the token.
pub trait ContractGenerator: Send + Sync {
    fn generate_contract(
        &self,
        metadata: &TokenMetadata,
        tokenomics: &Tokenomics,
    ) -> impl std::future::Future<Output = Result<ContractArtifact, GenerationError>> + Send;
}

/// Produces logo and palette for the token.
pub trait BrandingGenerator: Send + Sync {
    fn generate_branding(
        &self,
        metadata: &TokenMetadata,
    ) -> impl std::future::Future<Output = Result<BrandingKit, GenerationError>> + Send;
}
