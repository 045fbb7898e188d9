use crate::domain::RoastPrompt;
use serde::{Deserialize, Serialize};

pub const MAX_TOKENS: u32 = 500;
pub const FALLBACK_ROAST: &str = "Even AI refuses to roast you. That's how boring you are.";

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompt: &RoastPrompt) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: prompt.temperature(),
            top_p: 1.0,
            stream: false,
        }
    }
}

impl ChatCompletionResponse {
    /// First choice's text, or [`FALLBACK_ROAST`] when the provider sent nothing usable.
    pub fn into_roast_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ROAST.to_string())
    }
}
