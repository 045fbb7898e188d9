mod client;
mod prompt;
mod types;

pub use client::GroqClient;
pub use prompt::build_roast_prompt;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, FALLBACK_ROAST};
