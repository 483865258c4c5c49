use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use easi_llm::CompletionProvider;
use easi_mail::ContactRelay;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Contact relay, absent when no mail transport is configured.
    pub contact: Option<ContactRelay>,
    /// Completion provider for the chat widget, absent when no API key is set.
    pub completions: Option<Arc<dyn CompletionProvider>>,
    /// Completion limits applied to every chat request.
    pub chat_limits: ChatLimits,
    /// Process start, used as the sitemap `lastmod`.
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatLimits {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Longest the handler waits for the provider before giving up.
    pub timeout: Duration,
}

impl Default for ChatLimits {
    fn default() -> Self {
        Self {
            max_tokens: 600,
            temperature: 0.7,
            timeout: Duration::from_secs(20),
        }
    }
}

impl From<&easi_llm::CompletionConfig> for ChatLimits {
    fn from(config: &easi_llm::CompletionConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout,
        }
    }
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            contact: None,
            completions: None,
            chat_limits: ChatLimits::default(),
            started_at: Utc::now(),
        }
    }

    /// Attach the contact relay. Each send is capped at half the upstream
    /// deadline so both emails fit inside one request.
    pub fn with_contact(mut self, relay: ContactRelay) -> Self {
        let cap = self.config.upstream_deadline() / 2;
        let send_timeout = relay.send_timeout().min(cap);
        self.contact = Some(relay.with_send_timeout(send_timeout));
        self
    }

    /// How long a chat request may wait for the provider.
    pub fn chat_deadline(&self) -> Duration {
        self.chat_limits.timeout.min(self.config.upstream_deadline())
    }

    pub fn with_completions(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.completions = Some(provider);
        self
    }
}
