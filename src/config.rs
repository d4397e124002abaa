//! Settings for the tool itself
//!
//! Action inputs live in [`crate::inputs`]; this covers the knobs that control
//! how electron-release behaves, read from its own environment variables.

use std::env;
use std::fmt;
use thiserror::Error;

pub const LOG_LEVEL_VAR: &str = "ELECTRON_RELEASE_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "ELECTRON_RELEASE_LOG_JSON";
/// Set to `1` by GitHub Actions when step debug logging is enabled.
pub const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub log_level: String,
    pub log_json: bool,
    pub runner_debug: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
            runner_debug: false,
        }
    }
}

impl ToolConfig {
    pub fn from_env() -> Self {
        let runner_debug = env::var(RUNNER_DEBUG_VAR)
            .map(|v| v == "1")
            .unwrap_or(false);

        let log_level = env::var(LOG_LEVEL_VAR)
            .ok()
            .map(|v| v.to_lowercase())
            .unwrap_or_else(|| {
                if runner_debug {
                    "debug".to_string()
                } else {
                    DEFAULT_LOG_LEVEL.to_string()
                }
            });

        let log_json = env::var(LOG_JSON_VAR)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        Self {
            log_level,
            log_json,
            runner_debug,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_log_level(&self.log_level)
    }
}

/// Checks a log level name, case-insensitively.
pub fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationFailed(format!(
            "Invalid log level: {}. Valid options: {}",
            level,
            VALID_LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

impl fmt::Display for ToolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "electron-release configuration:")?;
        writeln!(f, "  Log level: {}", self.log_level)?;
        writeln!(f, "  JSON logs: {}", self.log_json)?;
        write!(f, "  Runner debug: {}", self.runner_debug)
    }
}
