//! Error types for the explanation provider

use thiserror::Error;

/// Errors that can occur while fetching a supplemental explanation
#[derive(Debug, Error)]
pub enum ExplainError {
    /// API key is not configured
    #[error("API key not configured. Set ANTHROPIC_API_KEY or run :key <api-key>")]
    ApiKeyNotFound,

    /// Failed to access system keyring
    #[error("Failed to access keyring: {0}")]
    KeyringError(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Rate limited by the API
    #[error("Rate limited. Retry after {retry_after_seconds} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after_seconds: u64,
    },

    /// The model answered without any text
    #[error("The model returned an empty explanation")]
    EmptyResponse,

    /// Invalid API key format
    #[error("Invalid API key format. Key should start with 'sk-ant-'")]
    InvalidApiKey,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ExplainError {
    /// Check if this error requires re-authentication
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ExplainError::ApiKeyNotFound
                | ExplainError::InvalidApiKey
                | ExplainError::ApiError { status: 401, .. }
        )
    }
}
