//! Single-line expansion.

use super::resolver::{resolve, UnresolvedModifier};
use crate::definitions::Definitions;

/// Prefix marking a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Prefix of the diagnostic line emitted for an unknown command.
pub const INVALID_COMMAND_PREFIX: &str = "# Invalid command : ";

/// How a script line was expanded, with its output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or whitespace-only line, passed through unchanged
    Blank(String),
    /// Line starting with `#`, passed through unchanged
    Comment(String),
    /// Leading token matched no command; holds the diagnostic line
    Unknown(String),
    /// Leading token matched a command; holds the expanded content
    Resolved(String),
}

/// Result of expanding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Outcome with output text
    pub outcome: LineOutcome,
    /// Modifiers left unresolved (only for [`LineOutcome::Resolved`])
    pub unresolved: Vec<UnresolvedModifier>,
}

impl Expansion {
    fn passthrough(outcome: LineOutcome) -> Self {
        Self {
            outcome,
            unresolved: Vec::new(),
        }
    }

    /// The output line, without a line terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.outcome {
            LineOutcome::Blank(text)
            | LineOutcome::Comment(text)
            | LineOutcome::Unknown(text)
            | LineOutcome::Resolved(text) => text,
        }
    }

    /// Consumes the expansion, returning the output line.
    #[must_use]
    pub fn into_text(self) -> String {
        match self.outcome {
            LineOutcome::Blank(text)
            | LineOutcome::Comment(text)
            | LineOutcome::Unknown(text)
            | LineOutcome::Resolved(text) => text,
        }
    }
}

/// Expands one script line.
///
/// The line is split on single spaces with no quoting, so consecutive spaces
/// yield empty tokens. The first token selects the command; the rest bind to
/// its modifiers positionally.
#[must_use]
pub fn expand(line: &str, definitions: &Definitions) -> Expansion {
    if line.trim().is_empty() {
        return Expansion::passthrough(LineOutcome::Blank(line.to_string()));
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Expansion::passthrough(LineOutcome::Comment(line.to_string()));
    }

    let mut tokens = line.split(' ');
    let name = tokens.next().unwrap_or_default();

    let Some(command) = definitions.find_command(name) else {
        return Expansion::passthrough(LineOutcome::Unknown(format!(
            "{INVALID_COMMAND_PREFIX}{line}"
        )));
    };

    let args: Vec<&str> = tokens.collect();
    let resolution = resolve(definitions, command, &args);
    Expansion {
        outcome: LineOutcome::Resolved(resolution.text),
        unresolved: resolution.unresolved,
    }
}
