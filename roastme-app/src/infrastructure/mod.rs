pub mod groq;
pub mod language;
pub mod security;
