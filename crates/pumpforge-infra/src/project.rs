//! Contract and branding stand-ins.

use pumpforge_core::project::{BrandingGenerator, ContractGenerator};
use pumpforge_types::error::GenerationError;
use pumpforge_types::project::{BrandingKit, ContractArtifact};
use pumpforge_types::token::{TokenMetadata, Tokenomics};

/// Used until contract source can actually be generated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedContractGenerator;

impl ContractGenerator for UnimplementedContractGenerator {
    async fn generate_contract(
        &self,
        metadata: &TokenMetadata,
        tokenomics: &Tokenomics,
    ) -> Result<ContractArtifact, GenerationError> {
        tracing::warn!(
            symbol = %metadata.symbol,
            decimals = tokenomics.decimals,
            "contract generation requested but no contract generator is available"
        );
        Err(GenerationError::NotImplemented(format!(
            "contract generation for {}",
            metadata.symbol
        )))
    }
}

/// Used until branding assets can actually be generated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedBrandingGenerator;

impl BrandingGenerator for UnimplementedBrandingGenerator {
    async fn generate_branding(
        &self,
        metadata: &TokenMetadata,
    ) -> Result<BrandingKit, GenerationError> {
        tracing::warn!(
            symbol = %metadata.symbol,
            "branding requested but no branding generator is available"
        );
        Err(GenerationError::NotImplemented(format!(
            "branding for {}",
            metadata.symbol
        )))
    }
}
