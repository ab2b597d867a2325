//! Configuration management commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::definitions::DefinitionFormat;
use crate::editor::RefreshPolicy;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Definition file used when `--definitions` is not given
    #[arg(long, value_name = "FILE")]
    pub definitions_file: Option<PathBuf>,

    /// When script edits trigger a new conversion
    #[arg(long, value_name = "POLICY")]
    pub refresh_policy: Option<RefreshPolicy>,

    /// Log modifiers whose placeholder could not be resolved
    #[arg(long, value_name = "BOOL")]
    pub report_unresolved: Option<bool>,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self, definitions_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show => {
                let config = load_config();
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
                print!("{content}");
                println!(
                    "# definitions file in use: {}",
                    config.definitions_path(definitions_path).display()
                );
            }
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to get config directory: {e}")))?;
                println!("{}", path.display());
            }
            ConfigCommand::Set(args) => args.execute()?,
        }
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        if self.definitions_file.is_none()
            && self.refresh_policy.is_none()
            && self.report_unresolved.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --definitions-file, --refresh-policy, or --report-unresolved",
            ));
        }

        let mut config = load_config();

        if let Some(path) = &self.definitions_file {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Definition file does not exist: {}",
                    path.display()
                )));
            }
            if DefinitionFormat::from_path(path).is_none() {
                return Err(CliError::validation(format!(
                    "Unsupported definition format: {} (expected .toml, .json, .json5, .yaml or .yml)",
                    path.display()
                )));
            }
            config.paths.definitions = Some(path.clone());
        }

        if let Some(policy) = self.refresh_policy {
            config.conversion.refresh_policy = policy;
        }

        if let Some(report) = self.report_unresolved {
            config.conversion.report_unresolved = report;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}
