use async_trait::async_trait;

use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::chat_message::ChatMessage;

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// One chat-completion round-trip: returns the text body of the first
    /// choice the endpoint produced.
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<String, AiProviderError>;
}
