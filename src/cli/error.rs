//! CLI-level errors (wraps configuration errors)

use thiserror::Error;

use crate::config::ConfigError;

/// Startup failure while wiring flags into the config store.
///
/// Not recoverable: no command runs after this.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("failed to bind {flag} flag: {source}")]
    FlagBinding {
        flag: &'static str,
        #[source]
        source: ConfigError,
    },
}

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_)
            | CliError::Usage(_)
            | CliError::Io { .. }
            | CliError::Serialize(_) => crate::exitcode::FAILURE,
        }
    }
}
