//! CLI definition for the `pumpforge` binary.
//!
//! A single command: with no flags it generates one token concept using
//! `pumpforge.toml` (if present) and the provider key from the environment.

pub mod generate;

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use pumpforge_types::llm::ProviderKind;

/// Generate a meme token concept with an AI completion provider.
#[derive(Parser)]
#[command(name = "pumpforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ./pumpforge.toml if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme for the token concept (overrides config).
    #[arg(long)]
    pub theme: Option<String>,

    /// Completion provider: openai or anthropic (overrides config and env).
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export spans with the OpenTelemetry stdout exporter.
    #[arg(long)]
    pub otel: bool,
}

impl Cli {
    /// Log filter for the chosen verbosity. `RUST_LOG` takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,pumpforge=debug,pumpforge_core=debug,pumpforge_infra=debug",
            _ => "trace",
        }
    }
}

/// `--help` and `--version` surface as parse errors but are not failures.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_valid() {
        let cli = Cli::try_parse_from(["pumpforge"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.provider.is_none());
        assert!(!cli.json);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "pumpforge",
            "--config",
            "custom.toml",
            "--provider",
            "anthropic",
            "--theme",
            "otter coin",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.provider, Some(ProviderKind::Anthropic));
        assert_eq!(cli.theme.as_deref(), Some("otter coin"));
        assert!(cli.json);
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn test_quiet_filter() {
        let cli = Cli::try_parse_from(["pumpforge", "-q"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = Cli::try_parse_from(["pumpforge", "--provider", "gemini"])
            .err()
            .unwrap();
        assert!(!is_informational(&err));
    }

    #[test]
    fn test_help_and_version_are_informational() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(["pumpforge", flag]).err().unwrap();
            assert!(is_informational(&err), "{flag} should not be a failure");
        }
    }
}
