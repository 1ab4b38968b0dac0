/// Port the HTTP server listens on when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Request timeout in seconds when `REQUEST_TIMEOUT_SECONDS` is unset or invalid
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Largest request body the generate and normalize endpoints accept
///
/// A brief is a handful of short fields; anything bigger is not a brief.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Tone used when the brief does not name one
pub const DEFAULT_TONE: &str = "confident, human, not salesy";

/// Requests slower than this are also reported to the application log
pub const DEFAULT_SLOW_REQUEST_THRESHOLD_MS: u64 = 5000;
