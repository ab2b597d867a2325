//! Semantic checks for loaded definitions.
//!
//! Loading only validates structure. This module finds the conflicts a
//! structurally valid file can still contain, such as two commands sharing a
//! key or a modifier pointing at a group that does not exist.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use super::Definitions;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Result of checking a definition model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Conflicts that make lookups ambiguous or modifiers unusable
    pub errors: Vec<CheckIssue>,
    /// Suspicious entries that still expand
    pub warnings: Vec<CheckIssue>,
}

impl CheckReport {
    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} definition errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error.message));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning.message));
            }
        }

        message
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIssue {
    /// Type of finding
    pub kind: CheckIssueKind,
    /// Human-readable description
    pub message: String,
}

impl CheckIssue {
    fn new(kind: CheckIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Kinds of definition findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckIssueKind {
    /// Two commands share a key (case-insensitive)
    DuplicateCommand,
    /// Two modifier groups share a key
    DuplicateModifierGroup,
    /// A modifier references a group that does not exist
    UnknownModifierGroup,
    /// Two items in one group share an argument token
    DuplicateItemArg,
    /// A modifier's default argument is not an item of its group
    UnknownDefaultArg,
    /// A modifier's placeholder does not appear in the command content
    UnusedPlaceholder,
    /// A command has an empty key and can never be matched
    EmptyCommandKey,
}

/// Checks a definition model for semantic conflicts.
#[must_use]
pub fn check(definitions: &Definitions) -> CheckReport {
    let mut report = CheckReport::default();
    let placeholder_regex = Regex::new(r"\{([^{}]+)\}").unwrap();

    let mut seen_commands: HashMap<String, &str> = HashMap::new();
    for group in &definitions.command_groups {
        for command in &group.items {
            if command.command.trim().is_empty() {
                report.warnings.push(CheckIssue::new(
                    CheckIssueKind::EmptyCommandKey,
                    format!("Command '{}' in group '{}' has an empty key", command.title, group.title),
                ));
                continue;
            }
            let key = command.command.to_lowercase();
            if let Some(first_group) = seen_commands.get(&key) {
                report.errors.push(CheckIssue::new(
                    CheckIssueKind::DuplicateCommand,
                    format!(
                        "Command '{}' in group '{}' duplicates a command in group '{}'",
                        command.command, group.title, first_group
                    ),
                ));
            } else {
                seen_commands.insert(key, &group.title);
            }
        }
    }

    let mut seen_groups = HashSet::new();
    for group in &definitions.modifier_groups {
        if !seen_groups.insert(group.key.as_str()) {
            report.errors.push(CheckIssue::new(
                CheckIssueKind::DuplicateModifierGroup,
                format!("Modifier group '{}' is defined more than once", group.key),
            ));
        }

        let mut seen_args = HashSet::new();
        for item in &group.items {
            if !seen_args.insert(item.arg.as_str()) {
                report.warnings.push(CheckIssue::new(
                    CheckIssueKind::DuplicateItemArg,
                    format!(
                        "Argument '{}' appears more than once in modifier group '{}'",
                        item.arg, group.key
                    ),
                ));
            }
        }
    }

    for command in definitions.commands() {
        let placeholders: HashSet<&str> = placeholder_regex
            .captures_iter(&command.content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        for modifier in &command.modifiers {
            let Some(group) = definitions.modifier_group(&modifier.group) else {
                report.errors.push(CheckIssue::new(
                    CheckIssueKind::UnknownModifierGroup,
                    format!(
                        "Command '{}' references unknown modifier group '{}'",
                        command.command, modifier.group
                    ),
                ));
                continue;
            };

            if group.item(&modifier.default_arg).is_none() {
                report.warnings.push(CheckIssue::new(
                    CheckIssueKind::UnknownDefaultArg,
                    format!(
                        "Command '{}' defaults to '{}', which is not an argument of group '{}'",
                        command.command, modifier.default_arg, group.key
                    ),
                ));
            }

            let name = modifier.placeholder_name(group);
            if !placeholders.contains(name) {
                report.warnings.push(CheckIssue::new(
                    CheckIssueKind::UnusedPlaceholder,
                    format!(
                        "Command '{}' has no '{{{}}}' placeholder for group '{}'",
                        command.command, name, group.key
                    ),
                ));
            }
        }
    }

    report
}
