//! Supplemental explanations from Claude
//!
//! Provides API key management, the HTTP client, prompt composition and the
//! [`ExplanationProvider`] trait the quiz talks to.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod prompt;
pub mod provider;

pub use auth::ApiKeyManager;
pub use client::ClaudeClient;
pub use error::ExplainError;
pub use models::ClaudeModel;
pub use provider::{ClaudeExplainer, ExplanationProvider, UnconfiguredExplainer, provider_from_config};
