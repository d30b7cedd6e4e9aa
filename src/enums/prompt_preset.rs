use crate::constants::prompts::{CLEANUP_PROMPT, COMMENT_PROMPT, DOCSTRING_PROMPT};
use crate::errors::{LazyDevError, LazyDevResult};

/// Bundled instruction texts selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPreset {
    Comment,
    Docstring,
    Cleanup,
}

const PRESET_NAMES: &[&str] = &["comment", "docstring", "cleanup"];

impl PromptPreset {
    pub fn from_name(name: &str) -> LazyDevResult<Self> {
        match name {
            "comment" => Ok(Self::Comment),
            "docstring" => Ok(Self::Docstring),
            "cleanup" => Ok(Self::Cleanup),
            _ => Err(LazyDevError::unknown_preset(name, PRESET_NAMES)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Docstring => "docstring",
            Self::Cleanup => "cleanup",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Comment => COMMENT_PROMPT,
            Self::Docstring => DOCSTRING_PROMPT,
            Self::Cleanup => CLEANUP_PROMPT,
        }
    }
}
