use std::path::Path;
use std::sync::Arc;

use crate::errors::{LazyDevError, LazyDevResult};
use crate::services::file_editor::FileEditor;
use crate::services::template_engine::Template;
use crate::structs::apply_options::ApplyOptions;
use crate::structs::chat_message::ChatMessage;
use crate::structs::code_change_response::CodeChangeResponse;
use crate::structs::retry_policy::RetryPolicy;
use crate::traits::ai_provider::AiProvider;

/// Sends one code file through the templated model round-trip and
/// conditionally overwrites it with the model's returned content.
pub struct CodeTemplateApplier {
    provider: Arc<dyn AiProvider>,
    retry_policy: RetryPolicy,
}

impl CodeTemplateApplier {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self {
            provider,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Apply the prompt to `code_file`, overwriting it in place when the
    /// model requires a change and returned content.
    ///
    /// Per-attempt transport and validation failures are logged and retried
    /// within the policy's budget; exhaustion fails with `RetriesExhausted`
    /// and leaves the file untouched.
    pub async fn apply(
        &self,
        code_file: &Path,
        options: &ApplyOptions,
    ) -> LazyDevResult<CodeChangeResponse> {
        let prompt = Self::resolve_prompt(options)?;
        let template = Template::load(options.template_file.as_deref())?;
        let code = FileEditor::read(code_file)?;

        let rendered = template.render_code_change(&code, &prompt)?;
        let messages = vec![ChatMessage::system(rendered)];

        let max_attempts = self.retry_policy.max_attempts();
        let mut last_error: Option<LazyDevError> = None;

        for attempt in 1..=max_attempts {
            match self.provider.chat(&messages, &options.model).await {
                Ok(body) => match CodeChangeResponse::parse(&body) {
                    Ok(response) => {
                        if let Some(content) = response.proposed_content() {
                            FileEditor::overwrite(code_file, content, options.backup)?;
                        }
                        return Ok(response);
                    }
                    Err(e) => {
                        log::warn!(
                            "⚠️ Attempt {}/{}: model response failed validation: {}",
                            attempt,
                            max_attempts,
                            e
                        );
                        last_error = Some(e);
                    }
                },
                Err(e) => {
                    log::warn!(
                        "⚠️ Attempt {}/{}: request failed: {}",
                        attempt,
                        max_attempts,
                        e
                    );
                    last_error = Some(e.into());
                }
            }

            if let Some(delay) = self.retry_policy.delay_before_retry(attempt) {
                tokio::time::sleep(delay).await;
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no response received".to_string());
        Err(LazyDevError::retries_exhausted(max_attempts, &last_error))
    }

    // Exactly one prompt source must be supplied.
    fn resolve_prompt(options: &ApplyOptions) -> LazyDevResult<String> {
        match (&options.prompt, &options.prompt_file) {
            (Some(_), Some(_)) => Err(LazyDevError::invalid_argument(
                "both a prompt and a prompt file were provided",
                Some("pass only one of --prompt / --prompt-file"),
            )),
            (None, None) => Err(LazyDevError::invalid_argument(
                "must provide either a prompt or a prompt file",
                Some("pass --prompt \"...\" or --prompt-file <path>"),
            )),
            (Some(prompt), None) => Ok(prompt.clone()),
            (None, Some(path)) => FileEditor::read(path),
        }
    }
}
