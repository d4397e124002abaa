use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems detected before any external command runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{name}\" input variable is not defined")]
    MissingInput { name: String },

    #[error("\"{name}\" input variable is not valid UTF-8")]
    NonUnicodeInput { name: String },

    #[error("`package.json` file not found at path \"{}\"", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("\"{provider}\" not supported")]
    UnsupportedProvider { provider: String },
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Command `{command}` failed with {}", describe_exit(.code))]
    ExternalCommand { command: String, code: Option<i32> },

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ActionError {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
