//! Configuration loader for pumpforge.
//!
//! Reads `pumpforge.toml` (or an explicit `--config` path) into
//! [`ForgeConfig`], then layers `PUMPFORGE_*` environment overrides on top.
//!
//! - Default location missing -> built-in defaults.
//! - Explicit path missing, unreadable, or unparsable -> `ConfigError`.

use std::path::Path;

use pumpforge_types::config::ForgeConfig;
use pumpforge_types::error::ConfigError;
use pumpforge_types::llm::ProviderKind;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pumpforge.toml";

pub const ENV_PROVIDER: &str = "PUMPFORGE_PROVIDER";
pub const ENV_MODEL: &str = "PUMPFORGE_MODEL";
pub const ENV_BASE_URL: &str = "PUMPFORGE_BASE_URL";

/// Load configuration from `explicit`, or from [`DEFAULT_CONFIG_FILE`].
pub async fn load_config(explicit: Option<&Path>) -> Result<ForgeConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from(path, true).await,
        None => load_config_from(Path::new(DEFAULT_CONFIG_FILE), false).await,
    }
}

/// Load configuration from `path`.
///
/// When `required` is false a missing file yields [`ForgeConfig::default()`].
/// A file that exists but cannot be read or parsed is always an error.
pub async fn load_config_from(path: &Path, required: bool) -> Result<ForgeConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if required {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ForgeConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = toml::from_str::<ForgeConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    tracing::debug!(path = %path.display(), provider = %config.provider, "loaded config file");
    Ok(config)
}

/// Apply `PUMPFORGE_PROVIDER`, `PUMPFORGE_MODEL` and `PUMPFORGE_BASE_URL`.
///
/// `lookup` abstracts the environment so tests do not mutate process state.
/// Blank values are ignored.
pub fn apply_env_overrides<F>(config: &mut ForgeConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(provider) = get(ENV_PROVIDER) {
        config.provider = provider
            .parse::<ProviderKind>()
            .map_err(|e| ConfigError::Invalid(format!("{ENV_PROVIDER}: {e}")))?;
    }
    if let Some(model) = get(ENV_MODEL) {
        config.model = Some(model);
    }
    if let Some(base_url) = get(ENV_BASE_URL) {
        config.base_url = Some(base_url);
    }
    Ok(())
}

/// Process-environment lookup for [`apply_env_overrides`].
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_default_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_from(&tmp.path().join(DEFAULT_CONFIG_FILE), false)
            .await
            .unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.max_output_tokens, 512);
    }

    #[tokio::test]
    async fn load_config_missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("pumpforge.toml");
        tokio::fs::write(
            &config_path,
            r##"
provider = "anthropic"
theme = "otter-themed token"
timeout_secs = 10

[image]
color = "#ff0000"
"##,
        )
        .await
        .unwrap();

        let config = load_config(Some(&config_path)).await.unwrap();
        assert_eq!(config.provider, ProviderKind::Anthropic);
        assert_eq!(config.theme, "otter-themed token");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.image.rgb().unwrap(), [255, 0, 0]);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("pumpforge.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        // Even at the default location a broken file is not silently ignored.
        let err = load_config_from(&config_path, false).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_config_unknown_provider_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("pumpforge.toml");
        tokio::fs::write(&config_path, "provider = \"gemini\"").await.unwrap();

        let err = load_config(Some(&config_path)).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn env_overrides_replace_values() {
        let mut config = ForgeConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                (ENV_PROVIDER, "Anthropic"),
                (ENV_MODEL, "claude-3-5-haiku-20241022"),
                (ENV_BASE_URL, "http://127.0.0.1:9999"),
            ]),
        )
        .unwrap();

        assert_eq!(config.provider, ProviderKind::Anthropic);
        assert_eq!(config.resolved_model(), "claude-3-5-haiku-20241022");
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn env_overrides_ignore_blank_values() {
        let mut config = ForgeConfig::default();
        apply_env_overrides(&mut config, env(&[(ENV_PROVIDER, ""), (ENV_MODEL, "  ")])).unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert!(config.model.is_none());
    }

    #[test]
    fn env_override_invalid_provider_is_error() {
        let mut config = ForgeConfig::default();
        let err = apply_env_overrides(&mut config, env(&[(ENV_PROVIDER, "gemini")])).unwrap_err();
        assert!(err.to_string().contains(ENV_PROVIDER));
    }
}
