use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::{Commands, EditOptions};
use crate::enums::prompt_preset::PromptPreset;
use crate::errors::{LazyDevError, LazyDevResult};
use crate::logger::file_change_logger::FileChangeLogger;
use crate::services::ai_providers::openai::OpenAiProvider;
use crate::services::template_applier::CodeTemplateApplier;
use crate::structs::apply_options::ApplyOptions;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::retry_policy::RetryPolicy;
use crate::traits::ai_provider::AiProvider;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, cli: Cli) -> LazyDevResult<()> {
        self.start_time = Some(Instant::now());

        let result = self.dispatch(cli).await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn dispatch(&self, cli: Cli) -> LazyDevResult<()> {
        let Cli {
            api_key,
            organization,
            project,
            command,
        } = cli;

        match command {
            Commands::Init => self.init_command(),
            Commands::ImproveComments { paths, options } => {
                self.preset_command(api_key, organization, project, PromptPreset::Comment, paths, options)
                    .await
            }
            Commands::GenerateDocstrings { paths, options } => {
                self.preset_command(api_key, organization, project, PromptPreset::Docstring, paths, options)
                    .await
            }
            Commands::Cleanup { paths, options } => {
                self.preset_command(api_key, organization, project, PromptPreset::Cleanup, paths, options)
                    .await
            }
            Commands::Apply {
                paths,
                prompt,
                prompt_file,
                options,
            } => {
                let config = ConfigManager::load()?;
                let provider = Self::build_provider(api_key, organization, project, &config)?;
                self.run_batch(provider, "Applying prompt to", paths, prompt, prompt_file, options, &config)
                    .await
            }
        }
    }

    fn init_command(&self) -> LazyDevResult<()> {
        log::info!("🚀 Initializing lazydev configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Edit the configuration file to change model or retry defaults.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn preset_command(
        &self,
        api_key: Option<String>,
        organization: Option<String>,
        project: Option<String>,
        preset: PromptPreset,
        paths: Vec<PathBuf>,
        options: EditOptions,
    ) -> LazyDevResult<()> {
        let config = ConfigManager::load()?;
        let provider = Self::build_provider(api_key, organization, project, &config)?;

        let action = match preset {
            PromptPreset::Comment => "Refactoring comments in",
            PromptPreset::Docstring => "Generating docstrings for",
            PromptPreset::Cleanup => "Cleaning up",
        };
        let prompt = Some(preset.text().to_string());

        self.run_batch(provider, action, paths, prompt, None, options, &config)
            .await
    }

    fn build_provider(
        api_key: Option<String>,
        organization: Option<String>,
        project: Option<String>,
        config: &Config,
    ) -> LazyDevResult<Arc<dyn AiProvider>> {
        let api_key = api_key.ok_or_else(|| {
            LazyDevError::invalid_argument(
                "API key not provided",
                Some("use --api-key or set OPENAI_API_KEY in the environment or an .env file"),
            )
        })?;

        let provider = OpenAiProvider::new(api_key)
            .with_organization(organization)
            .with_project(project)
            .with_base_url(config.api_base_url.clone());

        Ok(Arc::new(provider))
    }

    // Files are processed strictly sequentially, one model round-trip at a
    // time. A failure on one file does not abort the batch.
    #[allow(clippy::too_many_arguments)]
    async fn run_batch(
        &self,
        provider: Arc<dyn AiProvider>,
        action: &str,
        paths: Vec<PathBuf>,
        prompt: Option<String>,
        prompt_file: Option<PathBuf>,
        options: EditOptions,
        config: &Config,
    ) -> LazyDevResult<()> {
        let model = options.model.unwrap_or_else(|| config.model.clone());
        let max_retries = options.max_retries.unwrap_or(config.max_retries);
        let backup = options.backup || config.backup;

        let applier = CodeTemplateApplier::new(provider)
            .with_retry_policy(RetryPolicy::new(max_retries));

        let apply_options = ApplyOptions {
            prompt,
            prompt_file,
            model,
            template_file: options.template,
            backup,
        };

        let mut processed: usize = 0;
        let mut changed: usize = 0;
        let mut failed: usize = 0;

        for path in &paths {
            if !path.is_file() {
                log::warn!("⏭️ Skipping {}: not a file", path.display());
                continue;
            }

            log::info!("🛠 {} {}", action, path.display());
            processed += 1;

            match applier.apply(path, &apply_options).await {
                Ok(response) => {
                    FileChangeLogger::print_apply_outcome(path, &response);
                    if response.proposed_content().is_some() {
                        changed += 1;
                    }
                }
                Err(e) => {
                    failed += 1;
                    log::error!("❌ Failed to process {}: {}", path.display(), e);
                    log::error!("   Continuing with next file...");
                }
            }
        }

        log::info!(
            "📊 Processed {} files: {} changed, {} unchanged, {} failed",
            processed,
            changed,
            processed - changed - failed,
            failed
        );
        if failed > 0 {
            log::warn!("⚠️ {} files failed; see errors above", failed);
        }

        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
