//! The generate command: configuration -> credentials -> pipeline -> output.

use anyhow::Result;
use console::style;

use pumpforge_core::credentials::resolve_credentials;
use pumpforge_core::pipeline::TokenPipeline;
use pumpforge_infra::asset::PngImageGenerator;
use pumpforge_infra::config::{apply_env_overrides, load_config, process_env};
use pumpforge_infra::deploy::UnimplementedDeployer;
use pumpforge_infra::llm::create_client;
use pumpforge_infra::project::{UnimplementedBrandingGenerator, UnimplementedContractGenerator};
use pumpforge_infra::secret::env::EnvCredentialProvider;
use pumpforge_types::config::ForgeConfig;
use pumpforge_types::error::GenerationError;
use pumpforge_types::token::GenerationOutcome;

use super::Cli;

/// Run one generation and print the outcome.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli).await?;
    let outcome = generate(&config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if !cli.quiet {
        print_outcome(&outcome);
    }
    Ok(())
}

/// File, then environment, then command-line flags. Validated last.
async fn resolve_config(cli: &Cli) -> Result<ForgeConfig, GenerationError> {
    let mut config = load_config(cli.config.as_deref()).await?;
    apply_env_overrides(&mut config, process_env)?;

    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }

    config.validate()?;
    Ok(config)
}

async fn generate(config: &ForgeConfig) -> Result<GenerationOutcome, GenerationError> {
    // Resolved before any client exists, so a missing key never reaches the network.
    let credentials = resolve_credentials(&EnvCredentialProvider::new(), config.provider).await?;

    let client = create_client(config, &credentials)?;
    let images = PngImageGenerator::from_config(&config.image)?;

    let mut pipeline = TokenPipeline::new(
        client,
        images,
        UnimplementedContractGenerator,
        UnimplementedBrandingGenerator,
        UnimplementedDeployer,
        config.tokenomics.clone(),
    );
    if config.contract.enabled {
        pipeline = pipeline.with_contract();
    }
    if config.branding.enabled {
        pipeline = pipeline.with_branding();
    }
    if config.deploy.enabled {
        pipeline = pipeline.with_deployment(config.deploy.network.clone());
    }

    pipeline.run(&config.generation_request()).await
}

/// Log and print a fatal error.
pub fn report_error(err: &anyhow::Error, json: bool) {
    let kind = err
        .downcast_ref::<GenerationError>()
        .map(GenerationError::kind)
        .unwrap_or("internal_error");

    tracing::error!(kind, error = %err, "token generation failed");

    if json {
        let body = serde_json::json!({
            "error": {
                "kind": kind,
                "message": err.to_string(),
            }
        });
        println!("{body}");
    }
    eprintln!("{} {err:#}", style("✗").red().bold());
}

fn print_outcome(outcome: &GenerationOutcome) {
    let metadata = &outcome.metadata;
    let tokenomics = &outcome.tokenomics;

    println!();
    println!(
        "  {} Token concept generated",
        style("✓").green().bold()
    );
    println!();
    println!("  {}  {}", style("Name:").bold(), style(&metadata.name).cyan().bold());
    println!("  {}  ${}", style("Symbol:").bold(), style(&metadata.symbol).yellow());
    println!("  {}  {}", style("About:").bold(), metadata.description);
    if let Some(image) = &metadata.image_ref {
        println!("  {}  {}", style("Image:").bold(), style(image).dim());
    }
    println!();

    println!("  {}", style("── Tokenomics ──").dim());
    println!(
        "  Supply:      {} ({} decimals)",
        tokenomics.total_supply, tokenomics.decimals
    );
    println!(
        "  Liquidity {}% {} Marketing {}% {} Development {}% {} Team {}% {} Community {}%",
        tokenomics.liquidity,
        style("•").dim(),
        tokenomics.marketing,
        style("•").dim(),
        tokenomics.development,
        style("•").dim(),
        tokenomics.team,
        style("•").dim(),
        tokenomics.community,
    );
    println!();

    if let Some(contract) = &outcome.contract {
        println!("  {}", style("── Contract ──").dim());
        println!(
            "  {} source, {} bytes",
            contract.language,
            contract.source.len()
        );
        println!();
    }

    if let Some(branding) = &outcome.branding {
        println!("  {}", style("── Branding ──").dim());
        println!("  Logo:        {}", style(&branding.logo_ref).dim());
        println!("  Palette:     {}", branding.colors.join(", "));
        println!("  Style:       {}", branding.style);
        println!();
    }

    if let Some(deployment) = &outcome.deployment {
        println!("  {}", style("── Deployment ──").dim());
        println!(
            "  {} on {} ({})",
            style(&deployment.address).cyan(),
            deployment.network,
            deployment.status
        );
        println!();
    }

    println!("  {}", style("── Run ──").dim());
    println!("  Provider:    {} ({})", outcome.provider, outcome.model);
    println!(
        "  Tokens:      {} in / {} out",
        outcome.usage.input_tokens, outcome.usage.output_tokens
    );
    println!("  Run ID:      {}", style(outcome.run_id).dim());
    println!();
}
