use serde::{Deserialize, Serialize};

use crate::structs::ai::openai::openai_message::OpenAIMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChoice {
    pub index: i32,
    pub message: OpenAIMessage,
    pub finish_reason: Option<String>,
}
