use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use lazydev_cli::enums::ai_provider_error::AiProviderError;
use lazydev_cli::enums::chat_role::ChatRole;
use lazydev_cli::errors::LazyDevError;
use lazydev_cli::services::file_editor::FileEditor;
use lazydev_cli::services::template_applier::CodeTemplateApplier;
use lazydev_cli::structs::apply_options::ApplyOptions;
use lazydev_cli::structs::chat_message::ChatMessage;
use lazydev_cli::structs::retry_policy::RetryPolicy;
use lazydev_cli::traits::ai_provider::AiProvider;

/// Test double that replays a scripted sequence of model responses and
/// records every request it receives.
struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, AiProviderError>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(responses: Vec<Result<String, AiProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn recorded_messages(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn chat(&self, messages: &[ChatMessage], _model: &str) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiProviderError::ApiError("script exhausted".to_string())))
    }
}

fn write_code_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn applier(provider: Arc<ScriptedProvider>) -> CodeTemplateApplier {
    CodeTemplateApplier::new(provider).with_retry_policy(RetryPolicy::new(3))
}

#[tokio::test]
async fn apply_without_prompt_source_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let provider = ScriptedProvider::new(vec![]);

    let options = ApplyOptions {
        prompt: None,
        prompt_file: None,
        model: "gpt-4-turbo".to_string(),
        template_file: None,
        backup: false,
    };

    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, LazyDevError::InvalidArgument { .. }));
    assert_eq!(provider.calls(), 0);

    // The argument check also fires when the code file itself is missing
    let missing = dir.path().join("missing.rs");
    let err = applier(provider.clone())
        .apply(&missing, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, LazyDevError::InvalidArgument { .. }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn apply_with_both_prompt_sources_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let prompt_file = write_code_file(&dir, "prompt.txt", "do things");
    let provider = ScriptedProvider::new(vec![]);

    let options = ApplyOptions {
        prompt: Some("do things".to_string()),
        prompt_file: Some(prompt_file),
        model: "gpt-4-turbo".to_string(),
        template_file: None,
        backup: false,
    };

    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, LazyDevError::InvalidArgument { .. }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn apply_missing_code_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![]);

    let options = ApplyOptions::with_prompt("improve comments", "gpt-4-turbo");
    let err = applier(provider.clone())
        .apply(&dir.path().join("missing.rs"), &options)
        .await
        .unwrap_err();
    assert!(matches!(err, LazyDevError::NotFound { .. }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn no_change_response_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let provider = ScriptedProvider::new(vec![Ok(r#"{"change_required": false}"#.to_string())]);

    let options = ApplyOptions::with_prompt("improve comments", "gpt-4-turbo");
    let response = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap();

    assert!(!response.change_required);
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "fn main() {}");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn change_response_overwrites_file_with_exact_content() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "old contents");
    let provider = ScriptedProvider::new(vec![Ok(
        r#"{"change_required": true, "content": "X", "change_explanation": "rewrote it", "severity": "LOW"}"#
            .to_string(),
    )]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    let response = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap();

    assert_eq!(response.proposed_content(), Some("X"));
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "X");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn change_with_empty_content_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider =
        ScriptedProvider::new(vec![Ok(r#"{"change_required": true, "content": ""}"#.to_string())]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    assert_eq!(fs::read_to_string(&code_file).unwrap(), "original");
}

#[tokio::test]
async fn unparseable_bodies_exhaust_retry_budget() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![
        Ok("not json".to_string()),
        Ok("{\"wrong\": true}".to_string()),
        Ok("still not json".to_string()),
    ]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();

    match err {
        LazyDevError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(provider.calls(), 3);
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "original");
}

#[tokio::test]
async fn valid_response_on_second_attempt_stops_retrying() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![
        Ok("garbage".to_string()),
        Ok(r#"{"change_required": false}"#.to_string()),
        Ok(r#"{"change_required": true, "content": "never reached"}"#.to_string()),
    ]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    let response = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap();

    assert!(!response.change_required);
    assert_eq!(provider.calls(), 2);
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "original");
}

#[tokio::test]
async fn transport_failures_consume_the_same_budget() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![
        Err(AiProviderError::NetworkError("connection reset".to_string())),
        Err(AiProviderError::NetworkError("connection reset".to_string())),
        Err(AiProviderError::ApiError("HTTP 500".to_string())),
    ]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();

    match err {
        LazyDevError::RetriesExhausted { last_error, .. } => {
            assert!(last_error.contains("HTTP 500"));
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(provider.calls(), 3);
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "original");
}

#[tokio::test]
async fn transport_failure_then_valid_change_applies() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![
        Err(AiProviderError::NetworkError("timed out".to_string())),
        Ok(r#"{"change_required": true, "content": "fixed"}"#.to_string()),
    ]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(fs::read_to_string(&code_file).unwrap(), "fixed");
}

#[tokio::test]
async fn extra_response_fields_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![Ok(
        r#"{"change_required": true, "content": "new", "confidence": 0.8, "model_notes": ["a"]}"#
            .to_string(),
    )]);

    let options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    assert_eq!(fs::read_to_string(&code_file).unwrap(), "new");
}

#[tokio::test]
async fn backup_flag_preserves_original_bytes() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "original");
    let provider = ScriptedProvider::new(vec![Ok(
        r#"{"change_required": true, "content": "replacement"}"#.to_string(),
    )]);

    let mut options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    options.backup = true;

    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    assert_eq!(fs::read_to_string(&code_file).unwrap(), "replacement");
    let backup = FileEditor::backup_path(&code_file);
    assert_eq!(fs::read_to_string(&backup).unwrap(), "original");
}

#[tokio::test]
async fn prompt_file_contents_reach_the_model() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let prompt_file = write_code_file(&dir, "prompt.txt", "UNIQUE-PROMPT-MARKER");
    let provider = ScriptedProvider::new(vec![Ok(r#"{"change_required": false}"#.to_string())]);

    let options = ApplyOptions::with_prompt_file(prompt_file, "gpt-4-turbo");
    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    let requests = provider.recorded_messages();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].len(), 1);
    assert_eq!(requests[0][0].role, ChatRole::System);
    assert!(requests[0][0].content.contains("UNIQUE-PROMPT-MARKER"));
    assert!(requests[0][0].content.contains("fn main() {}"));
}

#[tokio::test]
async fn missing_prompt_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let provider = ScriptedProvider::new(vec![]);

    let options =
        ApplyOptions::with_prompt_file(dir.path().join("missing-prompt.txt"), "gpt-4-turbo");
    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();

    assert!(matches!(err, LazyDevError::NotFound { .. }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn custom_template_shapes_the_outbound_message() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "CODE-BODY");
    let template_file = write_code_file(
        &dir,
        "custom.tera",
        "TEMPLATE-MARKER\ntask: {{ prompt }}\nsource:\n{{ file_contents }}",
    );
    let provider = ScriptedProvider::new(vec![Ok(r#"{"change_required": false}"#.to_string())]);

    let mut options = ApplyOptions::with_prompt("PROMPT-BODY", "gpt-4-turbo");
    options.template_file = Some(template_file);

    applier(provider.clone()).apply(&code_file, &options).await.unwrap();

    let requests = provider.recorded_messages();
    let content = &requests[0][0].content;
    assert!(content.contains("TEMPLATE-MARKER"));
    assert!(content.contains("task: PROMPT-BODY"));
    assert!(content.contains("CODE-BODY"));
}

#[tokio::test]
async fn template_with_unknown_placeholder_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    let code_file = write_code_file(&dir, "code.rs", "fn main() {}");
    let template_file = write_code_file(&dir, "custom.tera", "{{ prompt }} / {{ repo_name }}");
    let provider = ScriptedProvider::new(vec![]);

    let mut options = ApplyOptions::with_prompt("rewrite", "gpt-4-turbo");
    options.template_file = Some(template_file);

    let err = applier(provider.clone())
        .apply(&code_file, &options)
        .await
        .unwrap_err();

    match err {
        LazyDevError::MissingPlaceholder { placeholder, .. } => {
            assert_eq!(placeholder, "repo_name");
        }
        other => panic!("expected MissingPlaceholder, got {:?}", other),
    }
    assert_eq!(provider.calls(), 0);
}
