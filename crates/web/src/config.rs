use std::path::PathBuf;
use std::time::Duration;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public origin used for canonical links and the sitemap.
    pub site_base_url: String,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec!["https://easi-as.com".into()],
            request_timeout_secs: 30,
            site_base_url: "https://easi-as.com".into(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `https://easi-as.com`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SITE_BASE_URL`        | `https://easi-as.com`      |
    /// | `STATIC_DIR`           | `<crate>/static`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "u16",
                value: port.clone(),
            })?;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.parse().map_err(|_| ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value: timeout.clone(),
            })?;
        }

        if let Ok(url) = std::env::var("SITE_BASE_URL") {
            config.site_base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(dir) = std::env::var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Time budget for outbound calls made while serving one request.
    ///
    /// Four fifths of the request timeout, so a slow upstream surfaces as a
    /// handler error with a JSON body instead of the timeout layer's empty
    /// 408.
    pub fn upstream_deadline(&self) -> Duration {
        self.request_timeout() * 4 / 5
    }
}
