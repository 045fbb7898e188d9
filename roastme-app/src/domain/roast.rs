use super::RoastLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roast {
    pub name: String,
    pub level: RoastLevel,
    pub roast_text: String,
}

impl Roast {
    pub fn new(name: String, level: RoastLevel, roast_text: String) -> Self {
        Self {
            name,
            level,
            roast_text,
        }
    }
}
