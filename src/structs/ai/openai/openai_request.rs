use serde::Serialize;

use crate::structs::chat_message::ChatMessage;

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest {
    pub model: String,

    pub messages: Vec<ChatMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    pub stream: bool,
}
