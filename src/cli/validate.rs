//! Validation command for definition files.

use crate::cli::common::{load_config, load_definitions, CliError, CliResult};
use crate::definitions::{check, CheckIssue};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Check a definition file for conflicts
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Validation response for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when there are no errors
    pub valid: bool,
    /// Definition file that was checked
    pub definitions: String,
    /// Errors
    pub errors: Vec<CheckIssue>,
    /// Warnings
    pub warnings: Vec<CheckIssue>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, definitions_path: Option<&Path>) -> CliResult<()> {
        let config = load_config();
        let path = config.definitions_path(definitions_path);
        let definitions = load_definitions(&config, Some(&path), true)?;

        let report = check(&definitions);
        let failed = !report.is_valid() || (self.strict && !report.warnings.is_empty());

        if self.json {
            let response = ValidationResponse {
                valid: report.is_valid(),
                definitions: path.display().to_string(),
                errors: report.errors.clone(),
                warnings: report.warnings.clone(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if report.errors.is_empty() && report.warnings.is_empty() {
            println!("✓ Definitions are valid: {}", path.display());
        } else {
            print!("{}", report.format_message());
        }

        if failed {
            return Err(CliError::validation(format!(
                "Validation failed with {} errors and {} warnings",
                report.errors.len(),
                report.warnings.len()
            )));
        }

        Ok(())
    }
}
