use super::RoastLevel;
use serde::{Deserialize, Serialize};

/// A validated roast request. Strings are already trimmed and bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastRequest {
    pub name: String,
    pub profession: String,
    pub level: RoastLevel,
    pub about: String,
}

impl RoastRequest {
    pub fn new(name: String, profession: String, level: RoastLevel, about: String) -> Self {
        Self {
            name,
            profession,
            level,
            about,
        }
    }

    pub fn with_level(&self, level: RoastLevel) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// Text the language heuristic runs over.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.profession, self.about)
    }
}
