use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid roast level: {0}")]
    InvalidLevel(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Generation provider failed: {0}")]
    ProviderError(String),

    #[error("Generation provider timed out")]
    Timeout,

    #[error("Endpoint not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show to a client. Never carries the inner detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields => {
                "Missing required fields: name, profession, and level are required"
            }
            Self::InvalidLevel(_) => "Invalid roast level. Choose: soft, medium, or brutal",
            Self::InvalidBody(_) => "Invalid request body",
            Self::ProviderError(_) | Self::Timeout => "Failed to generate roast. Please try again.",
            Self::NotFound => "Endpoint not found",
            Self::Config(_) | Self::Internal(_) => "Internal server error",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingFields | Self::InvalidLevel(_) | Self::InvalidBody(_) => 400,
            Self::NotFound => 404,
            Self::ProviderError(_) | Self::Timeout | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        success: bool,
        error: &'static str,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorResponse {
                success: false,
                error: self.user_message(),
            };
            (status, Json(body)).into_response()
        }
    }

}
