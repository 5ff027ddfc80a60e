use dioxus_logger::tracing::Level;
use std::str::FromStr;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Initializes console logging.
///
/// The level is read from the `LOG_LEVEL` environment variable (`trace`, `debug`,
/// `info`, `warn` or `error`) and defaults to `info` when unset or unrecognized.
pub fn init_logging() {
    let level = log_level_from(std::env::var("LOG_LEVEL").ok().as_deref());

    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Parses a log level name, falling back to the default level.
fn log_level_from(value: Option<&str>) -> Level {
    value
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
