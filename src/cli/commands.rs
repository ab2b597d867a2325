//! Command listing.

use crate::cli::common::{load_config, load_definitions, CliError, CliResult};
use crate::definitions::{Command, Definitions};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// List available commands and their argument choices
#[derive(Debug, Clone, Args)]
pub struct CommandsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Argument choice for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceInfo {
    /// Token used in scripts
    pub arg: String,
    /// Display label
    pub title: String,
    /// Substituted text
    pub value: String,
}

/// Argument slot for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentInfo {
    /// Modifier group key
    pub group: String,
    /// Display label
    pub title: String,
    /// Placeholder replaced by this argument
    pub placeholder: String,
    /// Token used when omitted
    pub default: String,
    /// Available choices (empty when the group is unknown)
    pub choices: Vec<ChoiceInfo>,
}

/// Command for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct CommandInfo {
    /// Matching key
    pub command: String,
    /// Display label
    pub title: String,
    /// Template content
    pub content: String,
    /// Positional arguments
    pub arguments: Vec<ArgumentInfo>,
}

/// Command group for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    /// Group title
    pub title: String,
    /// Commands in display order
    pub commands: Vec<CommandInfo>,
}

/// Command list response
#[derive(Debug, Clone, Serialize)]
pub struct CommandListResponse {
    /// Command groups
    pub groups: Vec<GroupInfo>,
    /// Total number of commands
    pub count: usize,
}

impl CommandsArgs {
    /// Execute the commands command
    pub fn execute(&self, definitions_path: Option<&Path>) -> CliResult<()> {
        let config = load_config();
        let definitions = load_definitions(&config, definitions_path, false)?;
        let response = build_response(&definitions);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if definitions.is_empty() {
            println!("No commands defined.");
            return Ok(());
        }

        for group in &response.groups {
            println!("{}", group.title);
            for command in &group.commands {
                println!("  {:<16} {}", command.command, command.title);
                for argument in &command.arguments {
                    let choices: Vec<String> = argument
                        .choices
                        .iter()
                        .map(|choice| {
                            if choice.arg == argument.default {
                                format!("[{}]", choice.arg)
                            } else {
                                choice.arg.clone()
                            }
                        })
                        .collect();
                    println!("    {:<14} {}", argument.title, choices.join(" "));
                }
            }
            println!();
        }
        println!("{} commands", response.count);

        Ok(())
    }
}

fn build_response(definitions: &Definitions) -> CommandListResponse {
    let groups: Vec<GroupInfo> = definitions
        .command_groups
        .iter()
        .map(|group| GroupInfo {
            title: group.title.clone(),
            commands: group
                .items
                .iter()
                .map(|command| command_info(definitions, command))
                .collect(),
        })
        .collect();
    let count: usize = groups.iter().map(|group| group.commands.len()).sum();

    CommandListResponse { groups, count }
}

fn command_info(definitions: &Definitions, command: &Command) -> CommandInfo {
    let arguments = command
        .modifiers
        .iter()
        .map(|modifier| match definitions.modifier_group(&modifier.group) {
            Some(group) => ArgumentInfo {
                group: group.key.clone(),
                title: group.display_title().to_string(),
                placeholder: modifier.placeholder_name(group).to_string(),
                default: modifier.default_arg.clone(),
                choices: group
                    .items
                    .iter()
                    .map(|item| ChoiceInfo {
                        arg: item.arg.clone(),
                        title: item.display_title().to_string(),
                        value: item.value.clone(),
                    })
                    .collect(),
            },
            None => ArgumentInfo {
                group: modifier.group.clone(),
                title: modifier.group.clone(),
                placeholder: modifier.replace_with_override.clone().unwrap_or_default(),
                default: modifier.default_arg.clone(),
                choices: Vec::new(),
            },
        })
        .collect();

    CommandInfo {
        command: command.command.clone(),
        title: if command.title.is_empty() {
            command.command.clone()
        } else {
            command.title.clone()
        },
        content: command.content.clone(),
        arguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::DefinitionFormat;

    #[test]
    fn test_build_response() {
        let definitions = Definitions::parse(
            r#"
[[commandGroups]]
title = "Tools"
items = [
    { command = "run", content = "run {target}", modifiers = [{ group = "target", defaultArg = "local" }] },
    { command = "ghost", title = "Ghost", modifiers = [{ group = "nowhere" }] },
]

[[modifierGroups]]
key = "target"
title = "Target"
replaceWith = "target"
items = [{ arg = "local", title = "Local", value = "/tmp" }]
"#,
            DefinitionFormat::Toml,
        )
        .unwrap();

        let response = build_response(&definitions);
        assert_eq!(response.count, 2);

        let run = &response.groups[0].commands[0];
        assert_eq!(run.title, "run");
        assert_eq!(run.arguments[0].title, "Target");
        assert_eq!(run.arguments[0].placeholder, "target");
        assert_eq!(run.arguments[0].choices[0].title, "Local");

        let ghost = &response.groups[0].commands[1];
        assert_eq!(ghost.title, "Ghost");
        assert!(ghost.arguments[0].choices.is_empty());
    }
}
