//! TokenPipeline -- runs one token generation end to end.
//!
//! prompt -> completion -> assembly -> image, then the optional contract,
//! branding and deployment steps.
//! Each step runs exactly once. The first error aborts the run and is
//! returned unchanged; there is no retry and no partial outcome.

use chrono::Utc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use pumpforge_types::error::GenerationError;
use pumpforge_types::llm::{CompletionOptions, LlmError};
use pumpforge_types::token::{GenerationOutcome, GenerationRequest, Tokenomics};

use crate::asset::ImageGenerator;
use crate::deploy::TokenDeployer;
use crate::llm::client::CompletionClient;
use crate::project::{BrandingGenerator, ContractGenerator};
use crate::token::assembler::ResultAssembler;
use crate::token::prompt::{TOKEN_SYSTEM_PROMPT, build_token_prompt};

/// Sequences the generation steps and hands the result to collaborators.
pub struct TokenPipeline<C, I, K, B, D> {
    client: C,
    images: I,
    contracts: K,
    branding: B,
    deployer: D,
    tokenomics: Tokenomics,
    contract_enabled: bool,
    branding_enabled: bool,
    deploy_network: Option<String>,
}

impl<C, I, K, B, D> TokenPipeline<C, I, K, B, D>
where
    C: CompletionClient,
    I: ImageGenerator,
    K: ContractGenerator,
    B: BrandingGenerator,
    D: TokenDeployer,
{
    /// Build a pipeline with the contract, branding and deployment steps
    /// disabled.
    pub fn new(
        client: C,
        images: I,
        contracts: K,
        branding: B,
        deployer: D,
        tokenomics: Tokenomics,
    ) -> Self {
        Self {
            client,
            images,
            contracts,
            branding,
            deployer,
            tokenomics,
            contract_enabled: false,
            branding_enabled: false,
            deploy_network: None,
        }
    }

    pub fn with_contract(mut self) -> Self {
        self.contract_enabled = true;
        self
    }

    pub fn with_branding(mut self) -> Self {
        self.branding_enabled = true;
        self
    }

    /// Enable the deployment step against `network`.
    pub fn with_deployment(mut self, network: impl Into<String>) -> Self {
        self.deploy_network = Some(network.into());
        self
    }

    #[tracing::instrument(
        name = "token_pipeline.run",
        skip(self, request),
        fields(theme = %request.theme, provider = self.client.name())
    )]
    pub async fn run(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        if request.max_output_tokens == 0 {
            return Err(LlmError::InvalidRequest(
                "max_output_tokens must be greater than zero".to_string(),
            )
            .into());
        }

        let run_id = Uuid::now_v7();
        info!(%run_id, "starting token generation");

        let prompt = build_token_prompt(&request.theme);
        let options = CompletionOptions {
            // Empty means "client default".
            model: request.model.clone().unwrap_or_default(),
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
            system: Some(TOKEN_SYSTEM_PROMPT.to_string()),
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.client.name(),
            gen_ai.request.model = %model_label(&options.model, self.client.model()),
            gen_ai.request.max_tokens = options.max_tokens,
            gen_ai.request.temperature = ?options.temperature,
        );
        let raw = self
            .client
            .complete(&prompt, &options)
            .instrument(span)
            .await?;

        info!(
            completion_id = %raw.id,
            model = %raw.model,
            stop_reason = %raw.stop_reason,
            input_tokens = raw.usage.input_tokens,
            output_tokens = raw.usage.output_tokens,
            "completion received"
        );

        let metadata = ResultAssembler::assemble(&raw)?;
        info!(name = %metadata.name, symbol = %metadata.symbol, "token metadata assembled");

        let image_path = self.images.generate(&metadata.name).await?;
        let metadata = metadata.with_image_ref(image_path.display().to_string());
        info!(path = %image_path.display(), "token image written");

        let contract = if self.contract_enabled {
            let artifact = self
                .contracts
                .generate_contract(&metadata, &self.tokenomics)
                .await?;
            info!(language = %artifact.language, "contract source generated");
            Some(artifact)
        } else {
            None
        };

        let branding = if self.branding_enabled {
            let kit = self.branding.generate_branding(&metadata).await?;
            info!(logo = %kit.logo_ref, "branding generated");
            Some(kit)
        } else {
            None
        };

        let deployment = match &self.deploy_network {
            Some(network) => {
                let result = self
                    .deployer
                    .deploy(&metadata, &self.tokenomics, network)
                    .await?;
                info!(address = %result.address, network = %result.network, "token deployed");
                Some(result)
            }
            None => None,
        };

        let model = if raw.model.is_empty() {
            self.client.model().to_string()
        } else {
            raw.model
        };

        Ok(GenerationOutcome {
            run_id,
            metadata,
            provider: self.client.name().to_string(),
            model,
            usage: raw.usage,
            tokenomics: self.tokenomics.clone(),
            contract,
            branding,
            deployment,
            generated_at: Utc::now(),
        })
    }
}

fn model_label<'a>(requested: &'a str, default: &'a str) -> &'a str {
    if requested.is_empty() { default } else { requested }
}
