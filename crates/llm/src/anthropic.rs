//! Client for the Anthropic Messages API (`POST /v1/messages`).

use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::{CompletionError, CompletionProvider, CompletionRequest};

const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the Messages API response we read.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    /// Concatenate the text blocks, ignoring any other block types.
    fn into_text(self) -> Result<String, CompletionError> {
        let text: String = self
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();

        if text.trim().is_empty() {
            return Err(CompletionError::EmptyResponse);
        }
        Ok(text)
    }
}

pub struct AnthropicClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl AnthropicClient {
    /// Create a client with its own connection pool and request timeout.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> MessagesBody<'a> {
        MessagesBody {
            model: &self.config.model,
            system: &request.system,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        tracing::debug!(
            model = %self.config.model,
            stop_reason = parsed.stop_reason.as_deref().unwrap_or("unknown"),
            "Completion received"
        );
        parsed.into_text()
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use easi_core::chat::ChatMessage;

    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "You are the EASI Agent.".into(),
            messages: vec![
                ChatMessage::user("Hi"),
                ChatMessage::assistant("Hello!"),
                ChatMessage::user("Pricing?"),
            ],
            max_tokens: 600,
            temperature: 0.7,
        }
    }

    #[test]
    fn body_carries_system_prompt_and_roles() {
        let client = AnthropicClient::new(CompletionConfig::new("sk-test")).unwrap();
        let request = request();
        let json = serde_json::to_value(client.body(&request)).unwrap();

        assert_eq!(json["model"], "claude-3-haiku-20240307");
        assert_eq!(json["system"], "You are the EASI Agent.");
        assert_eq!(json["max_tokens"], 600);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][2]["content"], "Pricing?");
    }

    #[test]
    fn response_text_blocks_are_concatenated() {
        let raw = r#"{
            "content": [
                {"type": "text", "text": "EASI costs "},
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "$199/year."}
            ],
            "stop_reason": "end_turn"
        }"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().unwrap(), "EASI costs $199/year.");
    }

    #[test]
    fn response_without_text_is_an_error() {
        let parsed: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_matches!(parsed.into_text(), Err(CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_request_error() {
        let mut config = CompletionConfig::new("sk-test");
        config.base_url = "http://127.0.0.1:1".into();
        config.timeout = std::time::Duration::from_secs(2);
        let client = AnthropicClient::new(config).unwrap();

        assert_matches!(
            client.complete(&request()).await,
            Err(CompletionError::Request(_))
        );
    }
}
