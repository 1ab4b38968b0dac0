pub mod config;
pub mod middleware;
pub mod paths;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::LogConfig;
pub use middleware::{access_log_middleware, request_id_middleware, AccessLogSettings, RequestId};

/// Initialize logging for server mode
///
/// This sets up:
/// - Console logging for immediate visibility
/// - When file logging is enabled, daily-rolled JSON files in the log
///   directory: `access.log` for HTTP requests, `application.log` for the rest
///
/// The returned guards flush the file writers on drop; keep them alive for
/// the life of the process.
pub fn init_logging(config: &LogConfig) -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console_log_level)),
        );

    let mut guards = Vec::new();
    let mut file_log_dir = None;
    let (access_layer, app_layer) = if config.file_logging_enabled {
        let log_dir = paths::get_log_directory(config.custom_log_dir.as_deref())?;

        let access_appender = tracing_appender::rolling::daily(&log_dir, "access.log");
        let app_appender = tracing_appender::rolling::daily(&log_dir, "application.log");

        let (access_writer, access_guard) = tracing_appender::non_blocking(access_appender);
        let (app_writer, app_guard) = tracing_appender::non_blocking(app_appender);
        guards.push(access_guard);
        guards.push(app_guard);

        // Access log only sees the "access_log" target
        let access_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(access_writer)
            .with_filter(EnvFilter::new("off").add_directive("access_log=info".parse()?));

        let app_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(app_writer)
            .with_filter(
                EnvFilter::new(&config.file_log_level).add_directive("access_log=off".parse()?),
            );

        file_log_dir = Some(log_dir);
        (Some(access_layer), Some(app_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(access_layer)
        .with(app_layer)
        .try_init()?;

    if let Some(log_dir) = file_log_dir {
        tracing::info!(
            log_dir = %log_dir.display(),
            "Logging initialized - access: access.log, application: application.log"
        );
    }

    Ok(guards)
}

/// Initialize quiet stderr logging for CLI mode
///
/// Stdout carries the normalized text, so diagnostics go to stderr and
/// default to warnings only.
pub fn init_cli_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("radio_read=warn")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Server starting on platform"
    );
}
