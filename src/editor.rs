//! Script editing buffer.
//!
//! The editor owns the raw script being composed and the expanded output
//! derived from it. Edits go through [`ScriptEditor::insert`] or
//! [`ScriptEditor::set_text`], both of which notify the change handler that
//! decides whether to re-run the conversion.

use crate::definitions::Definitions;
use crate::engine::{convert_with, ConvertOptions, Diagnostic};
use serde::{Deserialize, Serialize};

/// When an edit triggers a new conversion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Convert only when the number of line breaks changes.
    ///
    /// Editing a token inside an existing line leaves the output stale until
    /// the next line is added or removed.
    #[default]
    LineCount,
    /// Convert after every edit
    EveryChange,
}

/// Input buffer with a cursor and its derived output.
#[derive(Debug, Clone)]
pub struct ScriptEditor<'a> {
    definitions: &'a Definitions,
    options: ConvertOptions,
    policy: RefreshPolicy,
    text: String,
    /// Byte offset, always on a char boundary
    cursor: usize,
    output: String,
    diagnostics: Vec<Diagnostic>,
    last_line_count: Option<usize>,
}

impl<'a> ScriptEditor<'a> {
    /// Creates an empty editor.
    #[must_use]
    pub fn new(definitions: &'a Definitions, policy: RefreshPolicy, options: ConvertOptions) -> Self {
        Self {
            definitions,
            options,
            policy,
            text: String::new(),
            cursor: 0,
            output: String::new(),
            diagnostics: Vec::new(),
            last_line_count: None,
        }
    }

    /// Current script text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expanded output from the most recent conversion.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Diagnostics from the most recent conversion.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Cursor position as a byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamping to the buffer and snapping back to the
    /// nearest char boundary.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = self.clamp_cursor(cursor);
    }

    /// Inserts `text` at the cursor and moves the cursor past it.
    pub fn insert(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.on_text_changed();
    }

    /// Replaces the whole buffer, keeping the cursor where it still fits.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.clamp_cursor(self.cursor);
        self.on_text_changed();
    }

    /// Re-runs the conversion regardless of the refresh policy.
    pub fn refresh(&mut self) {
        let conversion = convert_with(&self.text, self.definitions, &self.options);
        self.output = conversion.text;
        self.diagnostics = conversion.diagnostics;
    }

    fn on_text_changed(&mut self) {
        let line_count = self.text.matches('\n').count();
        let should_refresh = match self.policy {
            RefreshPolicy::LineCount => self.last_line_count != Some(line_count),
            RefreshPolicy::EveryChange => true,
        };
        if should_refresh {
            tracing::debug!(line_count, "converting script");
            self.refresh();
        }
        self.last_line_count = Some(line_count);
    }

    fn clamp_cursor(&self, cursor: usize) -> usize {
        let mut cursor = cursor.min(self.text.len());
        while !self.text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        cursor
    }
}
