use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
const DEFAULT_MAX_TOKENS: u32 = 600;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Settings for the hosted completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl CompletionConfig {
    /// Config with defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables. Returns `None` when
    /// `ANTHROPIC_API_KEY` is unset, meaning chat is disabled.
    ///
    /// | Env Var              | Default                      |
    /// |----------------------|------------------------------|
    /// | `ANTHROPIC_API_KEY`  | required                     |
    /// | `ANTHROPIC_BASE_URL` | `https://api.anthropic.com`  |
    /// | `CHAT_MODEL`         | `claude-3-haiku-20240307`    |
    /// | `CHAT_MAX_TOKENS`    | `600`                        |
    /// | `CHAT_TEMPERATURE`   | `0.7`                        |
    /// | `CHAT_TIMEOUT_SECS`  | `20`                         |
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        let mut config = Self::new(api_key.trim());
        if let Ok(url) = std::env::var("ANTHROPIC_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("CHAT_MODEL") {
            config.model = model;
        }
        config.max_tokens = parse_var("CHAT_MAX_TOKENS").unwrap_or(DEFAULT_MAX_TOKENS);
        config.temperature = parse_var::<f32>("CHAT_TEMPERATURE")
            .map(|t| t.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_TEMPERATURE);
        config.timeout =
            Duration::from_secs(parse_var("CHAT_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS));

        Some(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
