//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `LEDGERCHECK_LOG_FORMAT`: `json` (default) or `pretty`

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LEDGERCHECK_LOG_FORMAT";

/// Output shape of emitted log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Initialize tracing/logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
