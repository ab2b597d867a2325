//! Script conversion command.

use crate::cli::common::{load_config, load_definitions, CliError, CliResult};
use crate::engine::convert_with;
use clap::Args;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Expand a command script into output text
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Script file to convert (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail on unloadable definitions and on any unknown command or unresolved argument
    #[arg(long)]
    pub strict: bool,

    /// Log arguments whose placeholder could not be resolved
    #[arg(long)]
    pub report_unresolved: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, definitions_path: Option<&Path>) -> CliResult<()> {
        let config = load_config();
        let definitions = load_definitions(&config, definitions_path, self.strict)?;

        let script = self.read_input()?;

        let mut options = config.conversion.convert_options();
        options.report_unresolved |= self.report_unresolved;
        let conversion = convert_with(&script, &definitions, &options);

        match &self.output {
            Some(path) => fs::write(path, &conversion.text).map_err(|e| {
                CliError::io(format!("Failed to write output {}: {e}", path.display()))
            })?,
            None => io::stdout()
                .write_all(conversion.text.as_bytes())
                .map_err(|e| CliError::io(format!("Failed to write output: {e}")))?,
        }

        if self.strict && !conversion.diagnostics.is_empty() {
            for diagnostic in &conversion.diagnostics {
                eprintln!("  {diagnostic}");
            }
            return Err(CliError::validation(format!(
                "Conversion produced {} diagnostics",
                conversion.diagnostics.len()
            )));
        }

        Ok(())
    }

    fn read_input(&self) -> CliResult<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read script {}: {e}", path.display()))),
            _ => {
                let mut script = String::new();
                io::stdin()
                    .read_to_string(&mut script)
                    .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
                Ok(script)
            }
        }
    }
}
