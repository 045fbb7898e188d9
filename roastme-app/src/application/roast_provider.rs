use crate::domain::RoastPrompt;
use async_trait::async_trait;
use roastme_errors::AppError;

/// A text-generation backend that turns a composed prompt into roast text.
#[async_trait]
pub trait RoastProvider: Send + Sync {
    async fn generate(&self, prompt: &RoastPrompt) -> Result<String, AppError>;
}
