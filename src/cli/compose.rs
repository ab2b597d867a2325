//! Compose a script line from a command and argument choices.
//!
//! This is the headless counterpart of picking a command and toggling its
//! arguments: the line is built through a [`SelectionSession`] and, with
//! `--append`, inserted into a script file through a [`ScriptEditor`].

use crate::cli::common::{load_config, load_definitions, CliError, CliResult};
use crate::editor::ScriptEditor;
use crate::session::{SelectionSession, SessionStart, SessionStep};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Compose a script line, optionally appending it to a script file
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Command key (case-insensitive)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Argument choices in slot order; omitted slots keep their defaults
    #[arg(value_name = "ARG")]
    pub args: Vec<String>,

    /// Insert the line at the end of this script and print the converted result
    #[arg(long, value_name = "FILE")]
    pub append: Option<PathBuf>,
}

impl ComposeArgs {
    /// Execute the compose command
    pub fn execute(&self, definitions_path: Option<&Path>) -> CliResult<()> {
        let config = load_config();
        let definitions = load_definitions(&config, definitions_path, true)?;

        let command = definitions.find_command(&self.command).ok_or_else(|| {
            CliError::validation(format!("Unknown command: {}", self.command))
        })?;

        let line = match SelectionSession::begin(&definitions, command) {
            SessionStart::Complete(line) => {
                if !self.args.is_empty() {
                    return Err(CliError::validation(format!(
                        "Command '{}' takes no arguments",
                        command.command
                    )));
                }
                line
            }
            SessionStart::Pending(mut session) => {
                if self.args.len() > session.slots().len() {
                    return Err(CliError::validation(format!(
                        "Command '{}' takes {} arguments, got {}",
                        command.command,
                        session.slots().len(),
                        self.args.len()
                    )));
                }
                for (slot, arg) in self.args.iter().enumerate() {
                    session
                        .select(slot, arg)
                        .map_err(|e| CliError::validation(e.to_string()))?;
                }
                match session.try_complete() {
                    SessionStep::Complete(line) => line,
                    SessionStep::Pending(session) => {
                        let missing: Vec<&str> = session
                            .slots()
                            .iter()
                            .filter(|slot| slot.selected.is_none())
                            .map(|slot| slot.group.display_title())
                            .collect();
                        return Err(CliError::validation(format!(
                            "Missing argument for: {}",
                            missing.join(", ")
                        )));
                    }
                }
            }
        };

        let Some(script_path) = &self.append else {
            print!("{line}");
            return Ok(());
        };

        let existing = if script_path.exists() {
            fs::read_to_string(script_path).map_err(|e| {
                CliError::io(format!("Failed to read script {}: {e}", script_path.display()))
            })?
        } else {
            String::new()
        };

        let mut editor = ScriptEditor::new(
            &definitions,
            config.conversion.refresh_policy,
            config.conversion.convert_options(),
        );
        editor.set_text(existing);
        editor.set_cursor(editor.text().len());
        if !editor.text().is_empty() && !editor.text().ends_with('\n') {
            editor.insert("\n");
        }
        editor.insert(&line);

        fs::write(script_path, editor.text()).map_err(|e| {
            CliError::io(format!("Failed to write script {}: {e}", script_path.display()))
        })?;

        print!("{}", editor.output());
        Ok(())
    }
}
