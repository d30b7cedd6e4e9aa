use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::DEFAULT_API_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::chat_message::ChatMessage;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAiProvider {
    api_key: String,
    organization: Option<String>,
    project: Option<String>,
    base_url: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            organization: None,
            project: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn get_request(&self, messages: &[ChatMessage], model: &str) -> OpenAIRequest {
        OpenAIRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            max_tokens: None,
            temperature: None,
            stream: false,
        }
    }

    async fn make_request(
        &self,
        url: String,
        request_body: OpenAIRequest,
    ) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");

        if let Some(organization) = &self.organization {
            request = request.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.project {
            request = request.header("OpenAI-Project", project);
        }

        request
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(messages, model);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        let content = body
            .first_content()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        Ok(content.to_string())
    }
}
