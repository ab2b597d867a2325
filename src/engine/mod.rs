//! Script expansion engine.
//!
//! A script is plain text with one command per line: the command key followed
//! by space-separated argument tokens. Conversion runs in three layers:
//!
//! - [`converter`] walks the script and keeps input and output lines 1:1
//! - [`expander`] classifies a line and expands known commands
//! - [`resolver`] binds argument tokens to a command's modifiers and
//!   substitutes their `{placeholder}` markers

pub mod converter;
pub mod expander;
pub mod resolver;

pub use converter::{convert, convert_with, Conversion, ConvertOptions, Diagnostic, DiagnosticKind};
pub use expander::{expand, Expansion, LineOutcome};
pub use resolver::{resolve, Resolution, UnresolvedModifier};
