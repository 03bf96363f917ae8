//! API key lookup: environment first, then the system keyring

use keyring::Entry;

use super::error::ExplainError;

/// Service name for keyring storage
const SERVICE_NAME: &str = "codemaster";
/// Entry name for the API key
const API_KEY_ENTRY: &str = "anthropic-api-key";
/// Environment variable checked before the keyring
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Manages the Anthropic API key
pub struct ApiKeyManager;

impl ApiKeyManager {
    /// Resolve the API key from the environment or the keyring
    pub fn get_api_key() -> Result<String, ExplainError> {
        if let Some(key) = Self::key_from_env() {
            return Ok(key);
        }
        Self::get_stored_key()
    }

    fn key_from_env() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
    }

    /// Get the API key from the system keyring
    pub fn get_stored_key() -> Result<String, ExplainError> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| ExplainError::KeyringError(e.to_string()))?;

        entry.get_password().map_err(|e| match e {
            keyring::Error::NoEntry => ExplainError::ApiKeyNotFound,
            _ => ExplainError::KeyringError(e.to_string()),
        })
    }

    /// Store the API key in the system keyring
    pub fn set_api_key(key: &str) -> Result<(), ExplainError> {
        let key = key.trim();
        if !Self::validate_key_format(key) {
            return Err(ExplainError::InvalidApiKey);
        }

        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| ExplainError::KeyringError(e.to_string()))?;

        entry.set_password(key).map_err(|e| ExplainError::KeyringError(e.to_string()))?;
        tracing::info!("Stored API key {}", Self::mask_key(key));
        Ok(())
    }

    /// Delete the stored API key
    pub fn delete_api_key() -> Result<(), ExplainError> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| ExplainError::KeyringError(e.to_string()))?;

        entry.delete_credential().map_err(|e| match e {
            keyring::Error::NoEntry => ExplainError::ApiKeyNotFound,
            _ => ExplainError::KeyringError(e.to_string()),
        })
    }

    /// Anthropic API keys start with "sk-ant-"
    fn validate_key_format(key: &str) -> bool {
        key.starts_with("sk-ant-") && key.len() > 20
    }

    /// Mask an API key for display (first 8 and last 4 chars)
    pub fn mask_key(key: &str) -> String {
        if key.len() <= 12 || !key.is_ascii() {
            return "*".repeat(key.chars().count());
        }
        format!("{}...{}", &key[..8], &key[key.len() - 4..])
    }
}
