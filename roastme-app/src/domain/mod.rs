mod language;
mod roast;
mod roast_level;
mod roast_prompt;
mod roast_request;

pub use language::{Language, LanguageTag, Script};
pub use roast::Roast;
pub use roast_level::RoastLevel;
pub use roast_prompt::RoastPrompt;
pub use roast_request::RoastRequest;
