//! Configuration types for pumpforge.
//!
//! `ForgeConfig` represents `pumpforge.toml`. Every field has a default, so an
//! empty file (or no file at all) yields a runnable configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::llm::ProviderKind;
use crate::token::{DEFAULT_THEME, GenerationRequest, Tokenomics};

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model override; the provider's default model is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Endpoint root override (proxies, local stand-ins).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Upper bound on waiting for the provider, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub contract: StepConfig,

    #[serde(default)]
    pub branding: StepConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub tokenomics: Tokenomics,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            base_url: None,
            theme: default_theme(),
            max_output_tokens: default_max_output_tokens(),
            temperature: None,
            timeout_secs: default_timeout_secs(),
            image: ImageConfig::default(),
            contract: StepConfig::default(),
            branding: StepConfig::default(),
            deploy: DeployConfig::default(),
            tokenomics: Tokenomics::default(),
        }
    }
}

impl ForgeConfig {
    /// Model to request: the configured override or the provider default.
    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    /// Endpoint root to call: the configured override or the provider default.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| self.provider.default_base_url().to_string())
    }

    /// Build the per-run request from this configuration.
    pub fn generation_request(&self) -> GenerationRequest {
        let mut request = GenerationRequest::new(self.theme.clone(), self.max_output_tokens)
            .with_model(self.resolved_model());
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_output_tokens == 0 {
            return Err(ConfigError::Invalid(
                "max_output_tokens must be greater than zero".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::Invalid(format!(
                    "temperature must be between 0.0 and 2.0, got {t}"
                )));
            }
        }
        self.image.validate()?;
        self.tokenomics.validate()
    }
}

/// Placeholder artwork settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_path")]
    pub path: PathBuf,
    /// Fill colour as `#rrggbb`.
    #[serde(default = "default_image_color")]
    pub color: String,
}

fn default_image_path() -> PathBuf {
    PathBuf::from("token-image.png")
}

fn default_image_color() -> String {
    "#ffffff".to_string()
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            path: default_image_path(),
            color: default_image_color(),
        }
    }
}

impl ImageConfig {
    /// Parse `color` into RGB components.
    pub fn rgb(&self) -> Result<[u8; 3], ConfigError> {
        parse_hex_color(&self.color)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("image.path must not be empty".to_string()));
        }
        self.rgb().map(|_| ())
    }
}

/// Parse a `#rrggbb` colour string.
pub fn parse_hex_color(color: &str) -> Result<[u8; 3], ConfigError> {
    let invalid = || ConfigError::Invalid(format!("invalid colour '{color}', expected #rrggbb"));

    let hex = color.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// On/off switch for an optional pipeline step (`[contract]`, `[branding]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// Deployment settings. Disabled unless explicitly turned on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_network")]
    pub network: String,
}

fn default_network() -> String {
    "mainnet".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            network: default_network(),
        }
    }
}
