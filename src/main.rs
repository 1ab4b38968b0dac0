use radio_read::cli::{self, Command};
use radio_read::config::constants::DEFAULT_TONE;
use radio_read::config::ServerConfig;
use radio_read::error::{self, RadioError};
use radio_read::logging::{self, LogConfig};
use radio_read::script::{self, Brief};
use radio_read::server::{create_router, AppState};
use radio_read::text_processing::normalize;
use std::env;
use std::io::Read;
use std::net::SocketAddr;
use std::time::Duration;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let command = Command::parse(env::args().skip(1))?;

    match command {
        Command::Help => cli::print_help(),
        Command::Version => cli::print_version(),
        Command::Server { port } => run_server(port).await?,
        Command::Script { duration, details } => {
            logging::init_cli_logging();

            let brief = Brief {
                tone: DEFAULT_TONE.to_string(),
                details: details.unwrap_or_default(),
                ..Brief::default()
            };
            let draft = script::assemble(duration, &brief);
            println!("{}", normalize(&draft));
        }
        Command::Normalize { text } => {
            logging::init_cli_logging();

            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            println!("{}", normalize(&text));
        }
    }

    Ok(())
}

async fn run_server(port: Option<u16>) -> error::Result<()> {
    let log_config = LogConfig::from_env();
    let _log_guards = logging::init_logging(&log_config)?;
    logging::log_platform_info();

    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    let state = AppState::new(
        &config,
        Duration::from_millis(log_config.slow_request_threshold_ms),
    );
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        timeout_secs = config.request_timeout.as_secs(),
        max_request_bytes = config.max_request_bytes,
        "Radio read server listening"
    );

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .map_err(RadioError::from)
}

fn read_stdin() -> error::Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches('\n').to_string())
}
