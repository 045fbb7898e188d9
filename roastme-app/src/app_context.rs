use crate::application::{GenerateRoast, RoastProvider};
use crate::config::AppConfig;
use crate::infrastructure::groq::GroqClient;
use roastme_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_roast: Arc<GenerateRoast>,
}

impl AppContext {
    pub fn new(provider: Arc<dyn RoastProvider>) -> Self {
        Self {
            generate_roast: Arc::new(GenerateRoast::new(provider)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = GroqClient::new(config)?;
        tracing::info!("Using Groq backend with model {}", client.model());
        Ok(Self::new(Arc::new(client)))
    }
}
