use std::env;
use std::time::Duration;

use super::constants::{DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_REQUEST_BYTES};

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening port (default: 3000)
    pub port: u16,

    /// Per-request timeout (default: 60 seconds)
    pub request_timeout: Duration,

    /// Largest accepted request body in bytes (default: 64 KiB)
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_request_bytes: MAX_REQUEST_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load server configuration from any variable source
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").and_then(|v| v.trim().parse().ok()) {
            config.port = port;
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECONDS").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(bytes) = lookup("RADIO_READ_MAX_REQUEST_BYTES").and_then(|v| v.trim().parse().ok()) {
            config.max_request_bytes = bytes;
        }

        config
    }
}
