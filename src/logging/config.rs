use std::env;

use crate::config::constants::DEFAULT_SLOW_REQUEST_THRESHOLD_MS;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Custom log directory path (overrides auto-detection)
    pub custom_log_dir: Option<String>,

    /// Filter for console output (default: "radio_read=info")
    pub console_log_level: String,

    /// Filter for the application log file (default: "debug")
    pub file_log_level: String,

    /// Write JSON access and application logs to disk (default: false)
    pub file_logging_enabled: bool,

    /// Slow request threshold in milliseconds (default: 5000)
    pub slow_request_threshold_ms: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            custom_log_dir: None,
            console_log_level: "radio_read=info".to_string(),
            file_log_level: "debug".to_string(),
            file_logging_enabled: false,
            slow_request_threshold_ms: DEFAULT_SLOW_REQUEST_THRESHOLD_MS,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load logging configuration from any variable source
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("RADIO_READ_LOG_DIR") {
            config.custom_log_dir = Some(dir);
        }

        if let Some(level) = lookup("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Some(level) = lookup("RADIO_READ_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Some(val) = lookup("RADIO_READ_FILE_LOGGING") {
            config.file_logging_enabled = val.to_lowercase() == "true";
        }

        if let Some(threshold) = lookup("LOG_SLOW_REQUEST_THRESHOLD_MS").and_then(|v| v.parse().ok()) {
            config.slow_request_threshold_ms = threshold;
        }

        config
    }
}
