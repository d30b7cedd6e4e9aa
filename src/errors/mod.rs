use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone)]
pub enum LazyDevError {
    // Caller misuse
    InvalidArgument {
        message: String,
        suggestion: Option<String>,
    },

    // Missing file dependency (code file, prompt file, template file)
    NotFound {
        path: String,
    },

    // File operation errors
    FileOperationError {
        path: String,
        operation: String,
        reason: String,
    },

    // Template errors
    TemplateError {
        template: String,
        reason: String,
    },
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    // Model response did not match the expected structured shape
    ValidationFailure {
        reason: String,
    },

    // Preset errors
    UnknownPreset {
        name: String,
        available: Vec<String>,
    },

    // Configuration errors
    ConfigError {
        path: String,
        reason: String,
    },

    // Model endpoint errors
    ProviderError {
        reason: String,
    },

    // Terminal failure after exhausting the retry budget
    RetriesExhausted {
        attempts: u32,
        last_error: String,
    },
}

impl LazyDevError {
    pub fn invalid_argument(message: &str, suggestion: Option<&str>) -> Self {
        Self::InvalidArgument {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.display().to_string(),
        }
    }

    pub fn file_error(path: &Path, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            path: path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn template_error(template: &str, reason: &str) -> Self {
        Self::TemplateError {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_placeholder(template: &str, placeholder: &str) -> Self {
        Self::MissingPlaceholder {
            template: template.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn validation_failure(reason: &str) -> Self {
        Self::ValidationFailure {
            reason: reason.to_string(),
        }
    }

    pub fn unknown_preset(name: &str, available: &[&str]) -> Self {
        Self::UnknownPreset {
            name: name.to_string(),
            available: available.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn config_error(path: &Path, reason: &str) -> Self {
        Self::ConfigError {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn retries_exhausted(attempts: u32, last_error: &str) -> Self {
        Self::RetriesExhausted {
            attempts,
            last_error: last_error.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { message, suggestion } => {
                let mut msg = format!("Invalid argument: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::NotFound { path } => {
                format!("The file {} does not exist", path)
            }
            Self::FileOperationError { path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}", operation, path, reason)
            }
            Self::TemplateError { template, reason } => {
                format!("Template '{}' error: {}", template, reason)
            }
            Self::MissingPlaceholder { template, placeholder } => {
                format!(
                    "Template '{}' references placeholder '{}' with no supplied value",
                    template, placeholder
                )
            }
            Self::ValidationFailure { reason } => {
                format!("Model response failed validation: {}", reason)
            }
            Self::UnknownPreset { name, available } => {
                format!(
                    "Unknown prompt preset '{}'\n💡 Available presets: {}",
                    name,
                    available.join(", ")
                )
            }
            Self::ConfigError { path, reason } => {
                format!("Configuration file error at '{}': {}", path, reason)
            }
            Self::ProviderError { reason } => {
                format!("Model endpoint error: {}", reason)
            }
            Self::RetriesExhausted { attempts, last_error } => {
                format!(
                    "Exhausted {} attempts without a parseable model response (last error: {})",
                    attempts, last_error
                )
            }
        }
    }
}

impl fmt::Display for LazyDevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for LazyDevError {}

impl From<std::io::Error> for LazyDevError {
    fn from(error: std::io::Error) -> Self {
        Self::FileOperationError {
            path: "<unknown>".to_string(),
            operation: "i/o".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LazyDevError {
    fn from(error: serde_json::Error) -> Self {
        Self::ValidationFailure {
            reason: error.to_string(),
        }
    }
}

impl From<AiProviderError> for LazyDevError {
    fn from(error: AiProviderError) -> Self {
        Self::ProviderError {
            reason: error.to_string(),
        }
    }
}

/// Result type alias for lazydev operations
pub type LazyDevResult<T> = Result<T, LazyDevError>;
