use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::RoastProvider;
use crate::config::AppConfig;
use crate::domain::RoastPrompt;
use async_trait::async_trait;
use roastme_errors::AppError;

pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.groq_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            api_key: config.groq_api_key.clone(),
            api_url: config.groq_api_url.clone(),
            model: config.groq_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn map_transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout
    } else {
        AppError::ProviderError(e.to_string())
    }
}

#[async_trait]
impl RoastProvider for GroqClient {
    async fn generate(&self, prompt: &RoastPrompt) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(&self.model, prompt);

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Groq API error: {} - {}", status, body);
            return Err(AppError::ProviderError(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(map_transport_error)?;

        Ok(completion.into_roast_text())
    }
}
