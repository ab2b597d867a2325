//! CLI command handlers for Template Builder.
//!
//! This module provides headless, scriptable access to the expansion engine
//! for automation, testing, and CI/CD integration.

pub mod commands;
pub mod common;
pub mod compose;
pub mod config;
pub mod convert;
pub mod validate;

// Re-export types used by main.rs and tests
pub use commands::CommandsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use compose::ComposeArgs;
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use validate::ValidateArgs;
