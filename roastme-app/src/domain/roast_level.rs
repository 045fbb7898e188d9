use roastme_errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    Soft,
    Medium,
    Brutal,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 3] = [Self::Soft, Self::Medium, Self::Brutal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Brutal => "brutal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Soft => "SOFT",
            Self::Medium => "MEDIUM",
            Self::Brutal => "BRUTAL",
        }
    }

    /// Sampling temperature sent with the completion request.
    pub fn temperature(&self) -> f32 {
        match self {
            Self::Soft => 0.7,
            Self::Medium => 0.8,
            Self::Brutal => 0.9,
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "medium" => Ok(Self::Medium),
            "brutal" => Ok(Self::Brutal),
            _ => Err(AppError::InvalidLevel(s.to_string())),
        }
    }
}
