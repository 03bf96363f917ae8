//! HTTP client for the Anthropic messages API

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use super::error::ExplainError;
use super::models::{CreateMessageRequest, MessageResponse};

/// Claude API client
pub struct ClaudeClient {
    /// HTTP client
    client: Client,
    /// API key for authentication
    api_key: String,
}

impl ClaudeClient {
    /// Claude API base URL
    const API_URL: &'static str = "https://api.anthropic.com/v1/messages";
    /// API version header value
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new client with the given API key and request timeout
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, ExplainError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_key })
    }

    /// Send a message request and wait for the complete response
    pub async fn send_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<MessageResponse, ExplainError> {
        tracing::debug!(model = %request.model, "Sending messages request");

        let response = self
            .client
            .post(Self::API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.text().await?;
        let message_response: MessageResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            id = %message_response.id,
            input_tokens = message_response.usage.input_tokens,
            output_tokens = message_response.usage.output_tokens,
            "Received response"
        );
        Ok(message_response)
    }
}

/// Map non-success HTTP statuses to errors
async fn check_status(response: Response) -> Result<Response, ExplainError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after)
            .unwrap_or(60);
        return Err(ExplainError::RateLimited { retry_after_seconds: retry_after });
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ExplainError::ApiError { status: 401, message: "Invalid API key".to_string() });
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ExplainError::ApiError { status: status.as_u16(), message });
    }

    Ok(response)
}

fn parse_retry_after(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = ClaudeClient::new("sk-ant-test-key".to_string(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.api_key, "sk-ant-test-key");
    }

    #[test]
    fn retry_after_parsing() {
        assert_eq!(parse_retry_after("30"), Some(30));
        assert_eq!(parse_retry_after(" 7 "), Some(7));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
