//! Text generation for the chat assistant.
//!
//! [`CompletionProvider`] is the seam the chat route calls through.
//! [`AnthropicClient`] implements it against the Anthropic Messages API.

pub mod anthropic;
pub mod config;

use easi_core::chat::ChatMessage;

pub use anthropic::AnthropicClient;
pub use config::CompletionConfig;

/// Errors from a completion call.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The provider answered but produced no text.
    #[error("Completion response contained no text")]
    EmptyResponse,

    /// The provider did not answer before the request deadline.
    #[error("Completion timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// No provider is configured (missing API key).
    #[error("No completion provider configured")]
    NotConfigured,
}

/// One completion call: a system prompt plus the conversation so far.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate the assistant's next message.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Model identifier, for logs and the health endpoint.
    fn model(&self) -> &str;
}
