use serde::{Deserialize, Serialize};

use crate::structs::ai::openai::openai_choice::OpenAIChoice;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<OpenAIChoice>,
}

impl OpenAIResponse {
    /// Text of the first choice, when the endpoint returned one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
