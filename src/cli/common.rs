//! Shared types and helpers for CLI commands.

use crate::config::Config;
use crate::definitions::Definitions;
use std::fmt;
use std::path::Path;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input or definitions failed validation
    ValidationError = 1,
    /// File could not be read, written or decoded
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the application configuration, falling back to defaults.
///
/// A broken config file is reported but never stops a command.
pub fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            Config::default()
        }
    }
}

/// Loads definitions for a command.
///
/// In strict mode a load failure is an error. Otherwise it is logged once
/// and the command continues with an empty model.
pub fn load_definitions(
    config: &Config,
    explicit: Option<&Path>,
    strict: bool,
) -> CliResult<Definitions> {
    let path = config.definitions_path(explicit);
    if strict {
        return Definitions::load(&path).map_err(|e| CliError::io(e.to_string()));
    }

    // load_or_empty already logs the failure
    let (definitions, _) = Definitions::load_or_empty(&path);
    Ok(definitions)
}
