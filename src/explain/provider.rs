//! The explanation provider seam
//!
//! The quiz only needs "turn a topic and concept into prose". The Claude
//! implementation is the real one; tests substitute their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::auth::ApiKeyManager;
use super::client::ClaudeClient;
use super::error::ExplainError;
use super::models::{ClaudeModel, CreateMessageRequest, Message};
use super::prompt::{SYSTEM_PROMPT, explanation_prompt};
use crate::catalog::Topic;
use crate::config::Config;

/// Produces supplemental explanations for a concept
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Explain `concept` in the context of `topic`
    async fn explain(&self, topic: Topic, concept: &str) -> Result<String, ExplainError>;
}

/// Explanations generated by Claude
pub struct ClaudeExplainer {
    client: ClaudeClient,
    model: ClaudeModel,
    max_tokens: u32,
}

impl ClaudeExplainer {
    pub fn new(client: ClaudeClient, model: ClaudeModel, max_tokens: u32) -> Self {
        Self { client, model, max_tokens }
    }

    fn build_request(&self, topic: Topic, concept: &str) -> CreateMessageRequest {
        CreateMessageRequest::new(self.model, vec![Message::user(explanation_prompt(topic, concept))])
            .with_system(SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
    }
}

#[async_trait]
impl ExplanationProvider for ClaudeExplainer {
    async fn explain(&self, topic: Topic, concept: &str) -> Result<String, ExplainError> {
        let request = self.build_request(topic, concept);
        let response = self.client.send_message(&request).await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(ExplainError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Stand-in used when no API key is available
pub struct UnconfiguredExplainer;

#[async_trait]
impl ExplanationProvider for UnconfiguredExplainer {
    async fn explain(&self, _topic: Topic, _concept: &str) -> Result<String, ExplainError> {
        Err(ExplainError::ApiKeyNotFound)
    }
}

/// Build the provider for the current configuration.
///
/// Falls back to [`UnconfiguredExplainer`] when no key can be found, so the
/// quiz still works and help requests show the fallback text.
pub fn provider_from_config(config: &Config) -> Arc<dyn ExplanationProvider> {
    let api_key = match ApiKeyManager::get_api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!("AI explanations unavailable: {}", e);
            return Arc::new(UnconfiguredExplainer);
        }
    };

    let timeout = Duration::from_secs(config.request_timeout_secs);
    match ClaudeClient::new(api_key, timeout) {
        Ok(client) => {
            tracing::info!(model = config.model.display_name(), "AI explanations enabled");
            Arc::new(ClaudeExplainer::new(client, config.model, config.max_tokens))
        }
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {}", e);
            Arc::new(UnconfiguredExplainer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claude_request_uses_config() {
        let client = ClaudeClient::new("sk-ant-test".into(), Duration::from_secs(1)).unwrap();
        let explainer = ClaudeExplainer::new(client, ClaudeModel::Sonnet45, 512);

        let request = explainer.build_request(Topic::React, "setState batching");

        assert_eq!(request.model, ClaudeModel::Sonnet45.model_id());
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.system.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0].content.contains("setState batching in React"));
    }

    #[tokio::test]
    async fn unconfigured_provider_fails() {
        let result = UnconfiguredExplainer.explain(Topic::JavaScript, "Symbols").await;
        assert!(matches!(result, Err(ExplainError::ApiKeyNotFound)));
    }
}
