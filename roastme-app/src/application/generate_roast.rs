use super::RoastProvider;
use crate::domain::{Roast, RoastRequest};
use crate::infrastructure::groq::build_roast_prompt;
use crate::infrastructure::language::detect_language;
use roastme_errors::AppError;
use std::sync::Arc;

pub struct GenerateRoast {
    provider: Arc<dyn RoastProvider>,
}

impl GenerateRoast {
    pub fn new(provider: Arc<dyn RoastProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, request: RoastRequest) -> Result<Roast, AppError> {
        let language = detect_language(&request.combined_text());
        tracing::info!("Detected language: {}", language);

        let prompt = build_roast_prompt(&request, language);
        let roast_text = self.provider.generate(&prompt).await.inspect_err(|e| {
            tracing::error!("Roast generation failed for {}: {}", request.name, e);
        })?;

        Ok(Roast::new(request.name, request.level, roast_text))
    }
}
