//! CLI argument parsing and help text

use crate::error::{RadioError, Result};
use crate::script::SpotDuration;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    /// Start the HTTP server, optionally on an explicit port
    Server { port: Option<u16> },
    /// Assemble a spot around the given details and print its radio read
    Script {
        duration: SpotDuration,
        details: Option<String>,
    },
    /// Print the radio read of the given text (stdin when absent)
    Normalize { text: Option<String> },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        let mut server = false;
        let mut script = false;
        let mut port = None;
        let mut duration = SpotDuration::default();
        let mut words = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-v" | "--version" => return Ok(Command::Version),
                "--server" => server = true,
                "--script" => script = true,
                "--port" => {
                    let value = iter.next().ok_or_else(|| {
                        RadioError::InvalidArgument("--port needs a value".to_string())
                    })?;
                    let parsed = value.parse::<u16>().map_err(|_| {
                        RadioError::InvalidArgument(format!("invalid port: {}", value))
                    })?;
                    port = Some(parsed);
                }
                "--duration" => {
                    let value = iter.next().ok_or_else(|| {
                        RadioError::InvalidArgument("--duration needs a value".to_string())
                    })?;
                    duration = value
                        .trim_start_matches(':')
                        .parse::<u32>()
                        .ok()
                        .and_then(SpotDuration::from_seconds)
                        .ok_or_else(|| {
                            RadioError::InvalidArgument(format!(
                                "invalid duration: {} (expected 15, 30 or 60)",
                                value
                            ))
                        })?;
                }
                _ => words.push(arg.clone()),
            }
        }

        let text = if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        };

        Ok(if server {
            Command::Server { port }
        } else if script {
            Command::Script {
                duration,
                details: text,
            }
        } else {
            Command::Normalize { text }
        })
    }
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Radio Read v{}", version);
    println!("Rewrites ad copy into the words a voice says on air");
    println!();
    println!("USAGE:");
    println!("    radio_read [OPTIONS] [TEXT]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    --script              Treat TEXT as brief details and print a full spot");
    println!("    --duration <SECONDS>  Spot length for --script: 15, 30 or 60 (default: 30)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Radio read of a line of copy");
    println!("    radio_read \"Call 555-123-4567 before 9:00\"");
    println!();
    println!("    # Read copy from stdin");
    println!("    cat spot.txt | radio_read");
    println!();
    println!("    # Draft a :15 spot");
    println!("    radio_read --script --duration 15 \"Two tacos for \\$5 until 2:00\"");
    println!();
    println!("    # Start server on custom port");
    println!("    radio_read --server --port 8080");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /api/generate   - Assemble a spot from a brief");
    println!("    POST   /api/normalize  - Radio read of arbitrary text");
    println!("    GET    /health         - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PORT                             - Server port (default: 3000)");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 60)");
    println!("    RADIO_READ_MAX_REQUEST_BYTES     - Largest accepted request body");
    println!("    RADIO_READ_FILE_LOGGING          - Write JSON log files (true/false)");
    println!("    RADIO_READ_LOG_DIR               - Directory for log files");
    println!("    RADIO_READ_FILE_LOG_LEVEL        - Filter for application.log (default: debug)");
    println!("    LOG_SLOW_REQUEST_THRESHOLD_MS    - Slow request warning threshold");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the working directory");
}

pub fn print_version() {
    println!("Radio Read v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        assert_eq!(
            Command::parse(["Call", "555-123-4567"]).unwrap(),
            Command::Normalize {
                text: Some("Call 555-123-4567".to_string())
            }
        );
    }

    #[test]
    fn test_parse_no_args_reads_stdin() {
        assert_eq!(
            Command::parse(Vec::<String>::new()).unwrap(),
            Command::Normalize { text: None }
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(Command::parse(["--help"]).unwrap(), Command::Help);
        assert_eq!(Command::parse(["text", "-h"]).unwrap(), Command::Help);
        assert_eq!(Command::parse(["-v"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_server() {
        assert_eq!(
            Command::parse(["--server", "--port", "8080"]).unwrap(),
            Command::Server { port: Some(8080) }
        );
        assert_eq!(
            Command::parse(["--server"]).unwrap(),
            Command::Server { port: None }
        );
    }

    #[test]
    fn test_parse_invalid_port() {
        assert!(matches!(
            Command::parse(["--server", "--port", "http"]),
            Err(RadioError::InvalidArgument(_))
        ));
        assert!(matches!(
            Command::parse(["--server", "--port"]),
            Err(RadioError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_script() {
        assert_eq!(
            Command::parse(["--script", "--duration", ":60", "Open", "late"]).unwrap(),
            Command::Script {
                duration: SpotDuration::Sixty,
                details: Some("Open late".to_string())
            }
        );
        assert_eq!(
            Command::parse(["--script"]).unwrap(),
            Command::Script {
                duration: SpotDuration::Thirty,
                details: None
            }
        );
    }

    #[test]
    fn test_parse_invalid_duration() {
        assert!(matches!(
            Command::parse(["--script", "--duration", "45"]),
            Err(RadioError::InvalidArgument(_))
        ));
    }
}
