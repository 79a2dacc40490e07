//! AI coach error types.

use thiserror::Error;

/// AI coach errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (transport failure or API rejection).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered, but not with a usable insight payload.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl AiError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
