//! Data models for the Anthropic messages API

use serde::{Deserialize, Serialize};

/// Available Claude models
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClaudeModel {
    /// Claude Haiku 4.5 - fast and cost-effective
    #[default]
    Haiku45,
    /// Claude Sonnet 4 - capable
    Sonnet4,
    /// Claude Sonnet 4.5 - latest Sonnet
    Sonnet45,
    /// Claude Opus 4.5 - most capable
    Opus45,
}

impl ClaudeModel {
    /// Get the API model identifier
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Haiku45 => "claude-haiku-4-5-20251001",
            Self::Sonnet4 => "claude-sonnet-4-20250514",
            Self::Sonnet45 => "claude-sonnet-4-5-20250929",
            Self::Opus45 => "claude-opus-4-5-20251101",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Haiku45 => "Claude Haiku 4.5",
            Self::Sonnet4 => "Claude Sonnet 4",
            Self::Sonnet45 => "Claude Sonnet 4.5",
            Self::Opus45 => "Claude Opus 4.5",
        }
    }

    /// Parse a model from a short name or a model ID
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "haiku" | "haiku45" | "haiku4.5" => Some(Self::Haiku45),
            "sonnet4" => Some(Self::Sonnet4),
            "sonnet" | "sonnet45" | "sonnet4.5" => Some(Self::Sonnet45),
            "opus" | "opus45" | "opus4.5" => Some(Self::Opus45),
            id => Self::all().iter().copied().find(|m| m.model_id() == id),
        }
    }

    /// List all available models
    pub fn all() -> &'static [ClaudeModel] {
        &[Self::Haiku45, Self::Sonnet4, Self::Sonnet45, Self::Opus45]
    }
}

impl std::str::FromStr for ClaudeModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown model: {}. Options: haiku, sonnet4, sonnet, opus", s))
    }
}

/// Message role in conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Request body for the messages API
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl CreateMessageRequest {
    /// Create a new request with default settings
    pub fn new(model: ClaudeModel, messages: Vec<Message>) -> Self {
        Self { model: model.model_id().to_string(), max_tokens: 1024, messages, system: None }
    }

    /// Set the system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response from the messages API
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: Usage,
}

impl MessageResponse {
    /// Concatenated text of all text blocks
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Content block in response
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Block type (usually "text")
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_parse() {
        assert_eq!(ClaudeModel::parse("haiku"), Some(ClaudeModel::Haiku45));
        assert_eq!(ClaudeModel::parse("sonnet4"), Some(ClaudeModel::Sonnet4));
        assert_eq!(ClaudeModel::parse("sonnet"), Some(ClaudeModel::Sonnet45));
        assert_eq!(ClaudeModel::parse("OPUS"), Some(ClaudeModel::Opus45));
        assert_eq!(ClaudeModel::parse("claude-sonnet-4-20250514"), Some(ClaudeModel::Sonnet4));
        assert_eq!(ClaudeModel::parse("gpt"), None);
    }

    #[test]
    fn request_serializes_without_empty_system() {
        let request = CreateMessageRequest::new(ClaudeModel::Haiku45, vec![Message::user("Hi")])
            .with_max_tokens(200);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "claude-haiku-4-5-20251001");
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("system").is_none());
    }

    #[test]
    fn response_text_joins_text_blocks() {
        let body = r###"{
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "## Simple explanation\n"},
                {"type": "tool_use", "id": "x", "name": "n", "input": {}},
                {"type": "text", "text": "typeof returns a string."}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 40, "output_tokens": 12}
        }"###;
        let response: MessageResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), "## Simple explanation\ntypeof returns a string.");
        assert_eq!(response.usage.output_tokens, 12);
    }
}
