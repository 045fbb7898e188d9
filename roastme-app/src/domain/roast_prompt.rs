use super::RoastLevel;

/// A composed system/user instruction pair, ready for a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RoastPrompt {
    pub level: RoastLevel,
    pub system: String,
    pub user: String,
}

impl RoastPrompt {
    pub fn temperature(&self) -> f32 {
        self.level.temperature()
    }
}
