use serde::{Deserialize, Serialize};

use crate::enums::severity::Severity;
use crate::errors::{LazyDevError, LazyDevResult};

/// The structured result parsed from the model's response body.
///
/// Unrecognized fields returned by the model are tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChangeResponse {
    pub change_required: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub change_explanation: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl CodeChangeResponse {
    pub fn parse(body: &str) -> LazyDevResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| LazyDevError::validation_failure(&e.to_string()))
    }

    /// The new file contents, present only when a change must be written.
    ///
    /// A file is overwritten if and only if the change-required flag is true
    /// and the content field is non-empty.
    pub fn proposed_content(&self) -> Option<&str> {
        if !self.change_required {
            return None;
        }
        self.content.as_deref().filter(|content| !content.is_empty())
    }
}
