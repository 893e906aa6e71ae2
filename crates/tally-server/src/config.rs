//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.  The only secret, the completion
//! provider credential, is supplied out-of-band via the environment and
//! never stored anywhere else.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) API server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// API key for the external completion provider.
    /// Env: `OPENAI_API_KEY`
    /// Default: unset (chat requests fail with a service error).
    pub completion_api_key: Option<String>,

    /// Chat-completions endpoint of the completion provider.
    /// Env: `COMPLETION_URL`
    /// Default: `https://api.openai.com/v1/chat/completions`
    pub completion_url: String,

    /// Model name sent with every completion request.
    /// Env: `COMPLETION_MODEL`
    /// Default: `gpt-4o-mini`
    pub completion_model: String,

    /// Timeout for one completion request, in seconds.
    /// Env: `COMPLETION_TIMEOUT_SECS`
    /// Default: `30`
    pub completion_timeout_secs: u64,

    /// Whether to seed demo users and events at startup.
    /// Env: `SEED_DEMO` (true/false)
    /// Default: `true`
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            completion_api_key: None,
            completion_url: "https://api.openai.com/v1/chat/completions".to_string(),
            completion_model: "gpt-4o-mini".to_string(),
            completion_timeout_secs: 30,
            seed_demo: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default");
            }
        }

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.completion_api_key = Some(key);
            }
        }

        if let Ok(url) = std::env::var("COMPLETION_URL") {
            config.completion_url = url;
        }

        if let Ok(model) = std::env::var("COMPLETION_MODEL") {
            config.completion_model = model;
        }

        if let Ok(val) = std::env::var("COMPLETION_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.completion_timeout_secs = secs;
            } else {
                tracing::warn!(value = %val, "Invalid COMPLETION_TIMEOUT_SECS, using default");
            }
        }

        if let Ok(val) = std::env::var("SEED_DEMO") {
            config.seed_demo = val != "false" && val != "0";
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 8080).into());
        assert_eq!(config.completion_model, "gpt-4o-mini");
        assert!(config.completion_api_key.is_none());
        assert!(config.seed_demo);
    }
}
