//! Gateway configuration, populated from environment variables.

use std::net::SocketAddr;

/// Runtime configuration for the bonus gateway.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `BONUS_GATEWAY_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `BONUS_API_URL` | (required) | Base URL of the remote bonus API |
/// | `BONUS_API_KEY` | (required) | Key sent to the remote API as `X-Functions-Key` |
/// | `BONUS_API_TIMEOUT_SECS` | `10` | Per-request timeout for downstream calls |
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Base URL of the remote bonus API, e.g. `"https://bonus.example.com/api/v1"`.
    pub api_url: String,

    /// API key for the remote bonus API.
    pub api_key: String,

    /// Seconds before an outstanding downstream request is abandoned.
    pub api_timeout_secs: u64,
}

/// A missing or malformed environment variable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl GatewayConfig {
    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr: SocketAddr = lookup("BONUS_GATEWAY_BIND")
            .unwrap_or_else(|| "0.0.0.0:3000".into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BONUS_GATEWAY_BIND",
                reason: e.to_string(),
            })?;

        let api_url = lookup("BONUS_API_URL").ok_or(ConfigError::Missing("BONUS_API_URL"))?;
        reqwest::Url::parse(&api_url).map_err(|e| ConfigError::Invalid {
            var: "BONUS_API_URL",
            reason: e.to_string(),
        })?;

        let api_key = lookup("BONUS_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("BONUS_API_KEY"))?;

        let api_timeout_secs = match lookup("BONUS_API_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "BONUS_API_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => 10,
        };

        Ok(Self {
            bind_addr,
            api_url,
            api_key,
            api_timeout_secs,
        })
    }
}
