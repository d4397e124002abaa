//! Structured logging setup
//!
//! Logs go to stderr so that the console output of npm, Yarn and
//! electron-builder stays readable on stdout. Initialization happens once per
//! process; later calls are ignored.
//!
//! # Example
//!
//! ```no_run
//! use electron_release::util::logging::{init_logging, LoggingConfig};
//! use electron_release::ToolConfig;
//!
//! init_logging(LoggingConfig::from_tool_config(&ToolConfig::from_env()));
//!
//! tracing::info!("Application started");
//! ```

use crate::config::ToolConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const CRATE_TARGET: &str = "electron_release";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., electron_release::action) in logs
    pub include_target: bool,

    /// Colorize output; defaults to whether stderr is a terminal
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: false,
            ansi: atty::is(atty::Stream::Stderr),
        }
    }
}

impl LoggingConfig {
    pub fn from_tool_config(config: &ToolConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            include_target: config.runner_debug,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, case-insensitively.
///
/// Unknown values fall back to `INFO`; reporting them is left to
/// [`crate::config::validate_log_level`].
///
/// ```
/// use electron_release::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn build_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_ok() {
        return filter;
    }
    match format!("{}={}", CRATE_TARGET, level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_ansi(config.ansi)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
