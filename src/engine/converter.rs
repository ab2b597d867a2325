//! Whole-script conversion.

use super::expander::{expand, LineOutcome};
use super::resolver::UnresolvedModifier;
use crate::definitions::Definitions;
use serde::Serialize;

/// Options for a conversion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Log unresolved modifiers at `warn` level
    pub report_unresolved: bool,
}

/// A problem found on one script line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number in the input
    pub line: usize,
    /// What went wrong
    pub kind: DiagnosticKind,
}

/// Kinds of per-line problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The leading token matched no command
    UnknownCommand {
        /// The unmatched token
        command: String,
    },
    /// A modifier placeholder was left in the output
    UnresolvedModifier {
        /// Details of the skipped modifier
        modifier: UnresolvedModifier,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownCommand { command } => {
                write!(f, "line {}: unknown command '{command}'", self.line)
            }
            DiagnosticKind::UnresolvedModifier { modifier } => {
                write!(f, "line {}: {modifier}", self.line)
            }
        }
    }
}

/// Output of a conversion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Expanded text, one `\n`-terminated line per input line
    pub text: String,
    /// Problems found, in line order
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts a script using default options.
#[must_use]
pub fn convert(input: &str, definitions: &Definitions) -> String {
    convert_with(input, definitions, &ConvertOptions::default()).text
}

/// Converts a script line by line.
///
/// Line endings may be LF or CRLF. Every input line produces exactly one
/// output line terminated by `\n`; nothing aborts the pass.
#[must_use]
pub fn convert_with(input: &str, definitions: &Definitions, options: &ConvertOptions) -> Conversion {
    let mut conversion = Conversion::default();

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let expansion = expand(line, definitions);

        if let LineOutcome::Unknown(_) = expansion.outcome {
            let command = line.split(' ').next().unwrap_or_default().to_string();
            tracing::debug!(line = line_number, %command, "unknown command");
            conversion.diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::UnknownCommand { command },
            });
        }

        for modifier in &expansion.unresolved {
            if options.report_unresolved {
                tracing::warn!(line = line_number, "{modifier}");
            }
            conversion.diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::UnresolvedModifier {
                    modifier: modifier.clone(),
                },
            });
        }

        conversion.text.push_str(&expansion.into_text());
        conversion.text.push('\n');
    }

    conversion
}
