//! Token concept types: the generation request, the assembled metadata,
//! tokenomics, and the outcome of a full pipeline run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deploy::DeploymentResult;
use crate::error::ConfigError;
use crate::llm::Usage;
use crate::project::{BrandingKit, ContractArtifact};

/// Theme used when none is configured or the configured one is blank.
pub const DEFAULT_THEME: &str = "animal-based meme token";

/// Immutable input for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub theme: String,
    pub max_output_tokens: u32,
    /// Overrides the client's configured model when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerationRequest {
    pub fn new(theme: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            theme: theme.into(),
            max_output_tokens,
            model: None,
            temperature: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Structured description of a generated token concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl TokenMetadata {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            description: description.into(),
            image_ref: None,
        }
    }

    /// Consume this record and return one carrying the given image reference.
    pub fn with_image_ref(self, image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: Some(image_ref.into()),
            ..self
        }
    }
}

/// Supply parameters and percentage allocation for a token.
///
/// The five allocation buckets must add up to exactly 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenomics {
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default = "default_total_supply")]
    pub total_supply: String,
    #[serde(default = "default_liquidity")]
    pub liquidity: u8,
    #[serde(default = "default_ten")]
    pub marketing: u8,
    #[serde(default = "default_ten")]
    pub development: u8,
    #[serde(default = "default_ten")]
    pub team: u8,
    #[serde(default = "default_community")]
    pub community: u8,
}

fn default_decimals() -> u8 {
    18
}

fn default_total_supply() -> String {
    "1000000000".to_string()
}

fn default_liquidity() -> u8 {
    40
}

fn default_ten() -> u8 {
    10
}

fn default_community() -> u8 {
    30
}

impl Default for Tokenomics {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            total_supply: default_total_supply(),
            liquidity: default_liquidity(),
            marketing: default_ten(),
            development: default_ten(),
            team: default_ten(),
            community: default_community(),
        }
    }
}

impl Tokenomics {
    /// Sum of all allocation buckets, in percent.
    pub fn allocation_total(&self) -> u32 {
        [
            self.liquidity,
            self.marketing,
            self.development,
            self.team,
            self.community,
        ]
        .iter()
        .map(|p| u32::from(*p))
        .sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.allocation_total();
        if total != 100 {
            return Err(ConfigError::Invalid(format!(
                "tokenomics allocation must total 100%, got {total}%"
            )));
        }
        if self.total_supply.is_empty() || !self.total_supply.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "tokenomics total_supply must be a positive integer, got '{}'",
                self.total_supply
            )));
        }
        if self.total_supply.chars().all(|c| c == '0') {
            return Err(ConfigError::Invalid(
                "tokenomics total_supply must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything a successful run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub run_id: Uuid,
    pub metadata: TokenMetadata,
    pub provider: String,
    pub model: String,
    pub usage: Usage,
    pub tokenomics: Tokenomics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractArtifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingKit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentResult>,
    pub generated_at: DateTime<Utc>,
}
