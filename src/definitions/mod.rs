//! Command and modifier definitions.
//!
//! This module holds the in-memory definition model that drives script
//! expansion: command groups with their commands, and modifier groups with
//! the items a command argument can resolve to. The model is loaded once from
//! a structured file and is read-only afterwards.

pub mod checker;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use checker::{check, CheckIssue, CheckIssueKind, CheckReport};

/// Relative location of the definition file next to the executable.
pub const DEFAULT_DEFINITIONS_PATH: &str = "Templates/Template.toml";

/// Errors raised while loading a definition file.
///
/// Only structural problems are reported here. Semantic conflicts such as
/// duplicate command keys are left to [`check`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("failed to read definitions from {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known format.
    #[error(
        "unsupported definition format for {} (expected .toml, .json, .json5, .yaml or .yml)",
        path.display()
    )]
    UnsupportedFormat {
        /// Path with the unknown extension
        path: PathBuf,
    },

    /// The document could not be decoded into the definition model.
    #[error("failed to parse {format} definitions: {message}")]
    Parse {
        /// Format the document was decoded as
        format: DefinitionFormat,
        /// Decoder error message
        message: String,
    },
}

/// Serialization format of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// TOML document
    Toml,
    /// Strict JSON document
    Json,
    /// JSON5 document (comments, trailing commas)
    Json5,
    /// YAML document
    Yaml,
}

impl DefinitionFormat {
    /// Determines the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "json5" => Some(Self::Json5),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// A selectable value inside a modifier group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierItem {
    /// Token that selects this item in a script line
    pub arg: String,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Literal text substituted for the placeholder
    #[serde(default)]
    pub value: String,
}

impl ModifierItem {
    /// Label shown for this item, falling back to its argument token.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.arg,
        }
    }
}

/// A named set of items that command arguments resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierGroup {
    /// Unique key referenced by [`Modifier::group`]
    pub key: String,
    /// Display label
    #[serde(default)]
    pub title: String,
    /// Placeholder name substituted in command content
    #[serde(default)]
    pub replace_with: String,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<ModifierItem>,
}

impl ModifierGroup {
    /// Finds the first item whose argument token equals `arg` exactly.
    #[must_use]
    pub fn item(&self, arg: &str) -> Option<&ModifierItem> {
        self.items.iter().find(|item| item.arg == arg)
    }

    /// Position of the item matching `arg`.
    #[must_use]
    pub fn item_index(&self, arg: &str) -> Option<usize> {
        self.items.iter().position(|item| item.arg == arg)
    }

    /// Label shown for this group, falling back to its key.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.key
        } else {
            &self.title
        }
    }
}

/// A positional argument slot declared by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// Key of the modifier group this slot resolves against
    pub group: String,
    /// Token used when the script line omits this argument
    #[serde(default)]
    pub default_arg: String,
    /// Placeholder name used instead of the group's `replaceWith`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_with_override: Option<String>,
}

impl Modifier {
    /// Placeholder name this modifier substitutes in `group`.
    ///
    /// A blank override (empty or whitespace-only) falls back to the group's
    /// `replace_with`.
    #[must_use]
    pub fn placeholder_name<'a>(&'a self, group: &'a ModifierGroup) -> &'a str {
        match self.replace_with_override.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &group.replace_with,
        }
    }
}

/// A named template producing one output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Display label
    #[serde(default)]
    pub title: String,
    /// Matching key, compared case-insensitively
    pub command: String,
    /// Output template with `{placeholder}` tokens
    #[serde(default)]
    pub content: String,
    /// Argument slots in positional order
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl Command {
    /// Returns true if `token` selects this command.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.command.to_lowercase() == token.to_lowercase()
    }
}

/// A titled collection of commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandGroup {
    /// Display label
    #[serde(default)]
    pub title: String,
    /// Commands in display order
    #[serde(default)]
    pub items: Vec<Command>,
}

/// The complete definition model.
///
/// Lookups follow document order, so when keys collide the first definition
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definitions {
    /// Command groups in display order
    #[serde(default)]
    pub command_groups: Vec<CommandGroup>,
    /// Modifier groups
    #[serde(default)]
    pub modifier_groups: Vec<ModifierGroup>,
}

impl Definitions {
    /// Loads definitions from a file, picking the decoder by extension.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format =
            DefinitionFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let definitions = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            groups = definitions.command_groups.len(),
            commands = definitions.commands().count(),
            modifier_groups = definitions.modifier_groups.len(),
            "loaded definitions"
        );
        Ok(definitions)
    }

    /// Decodes definitions from an in-memory document.
    pub fn parse(content: &str, format: DefinitionFormat) -> Result<Self, LoadError> {
        let parse_error = |message: String| LoadError::Parse { format, message };
        match format {
            DefinitionFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            DefinitionFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            DefinitionFormat::Json5 => json5::from_str(content).map_err(|e| parse_error(e.to_string())),
            DefinitionFormat::Yaml => {
                serde_yml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Loads definitions, falling back to an empty model on failure.
    ///
    /// The failure is logged once and handed back so the caller can surface
    /// it; the application keeps running with nothing to expand.
    pub fn load_or_empty(path: &Path) -> (Self, Option<LoadError>) {
        match Self::load(path) {
            Ok(definitions) => (definitions, None),
            Err(err) => {
                tracing::error!("{err}");
                (Self::default(), Some(err))
            }
        }
    }

    /// Default definition path next to the running executable.
    ///
    /// Falls back to a path relative to the working directory when the
    /// executable location is unknown.
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(DEFAULT_DEFINITIONS_PATH)
    }

    /// Iterates over every command across all groups, in order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.command_groups.iter().flat_map(|group| group.items.iter())
    }

    /// Finds the first command whose key matches `token` case-insensitively.
    #[must_use]
    pub fn find_command(&self, token: &str) -> Option<&Command> {
        self.commands().find(|command| command.matches(token))
    }

    /// Finds the first modifier group with the given key.
    #[must_use]
    pub fn modifier_group(&self, key: &str) -> Option<&ModifierGroup> {
        self.modifier_groups.iter().find(|group| group.key == key)
    }

    /// Returns true if no commands are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_TOML: &str = r#"
[[commandGroups]]
title = "Output"

[[commandGroups.items]]
title = "Echo"
command = "echo"
content = "say {msg}"
modifiers = [{ group = "msgs", defaultArg = "hi" }]

[[modifierGroups]]
key = "msgs"
title = "Messages"
replaceWith = "msg"
items = [{ arg = "hi", value = "Hello" }, { arg = "bye", title = "Goodbye", value = "Bye" }]
"#;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_toml() {
        let defs = Definitions::parse(SAMPLE_TOML, DefinitionFormat::Toml).unwrap();
        assert_eq!(defs.command_groups.len(), 1);
        assert_eq!(defs.command_groups[0].title, "Output");

        let echo = defs.find_command("echo").unwrap();
        assert_eq!(echo.content, "say {msg}");
        assert_eq!(echo.modifiers[0].default_arg, "hi");
        assert!(echo.modifiers[0].replace_with_override.is_none());

        let group = defs.modifier_group("msgs").unwrap();
        assert_eq!(group.replace_with, "msg");
        assert_eq!(group.item("bye").unwrap().value, "Bye");
    }

    #[test]
    fn test_parse_json_and_yaml_match_toml() {
        let json = r#"{
            "commandGroups": [{
                "title": "Output",
                "items": [{
                    "title": "Echo", "command": "echo", "content": "say {msg}",
                    "modifiers": [{ "group": "msgs", "defaultArg": "hi" }]
                }]
            }],
            "modifierGroups": [{
                "key": "msgs", "title": "Messages", "replaceWith": "msg",
                "items": [{ "arg": "hi", "value": "Hello" },
                          { "arg": "bye", "title": "Goodbye", "value": "Bye" }]
            }]
        }"#;
        let yaml = r#"
commandGroups:
  - title: Output
    items:
      - title: Echo
        command: echo
        content: "say {msg}"
        modifiers:
          - group: msgs
            defaultArg: hi
modifierGroups:
  - key: msgs
    title: Messages
    replaceWith: msg
    items:
      - arg: hi
        value: Hello
      - arg: bye
        title: Goodbye
        value: Bye
"#;
        let from_toml = Definitions::parse(SAMPLE_TOML, DefinitionFormat::Toml).unwrap();
        assert_eq!(Definitions::parse(json, DefinitionFormat::Json).unwrap(), from_toml);
        assert_eq!(Definitions::parse(json, DefinitionFormat::Json5).unwrap(), from_toml);
        assert_eq!(Definitions::parse(yaml, DefinitionFormat::Yaml).unwrap(), from_toml);
    }

    #[test]
    fn test_json5_allows_comments() {
        let doc = r#"{
            // groups first
            commandGroups: [{ title: "G", items: [{ command: "ls", content: "list", }] }],
        }"#;
        let defs = Definitions::parse(doc, DefinitionFormat::Json5).unwrap();
        assert!(defs.find_command("LS").is_some());
        assert!(defs.modifier_groups.is_empty());
    }

    #[test]
    fn test_find_command_is_case_insensitive_and_first_wins() {
        let doc = r#"
[[commandGroups]]
title = "A"
items = [{ command = "Build", content = "first" }]

[[commandGroups]]
title = "B"
items = [{ command = "build", content = "second" }]
"#;
        let defs = Definitions::parse(doc, DefinitionFormat::Toml).unwrap();
        assert_eq!(defs.find_command("BUILD").unwrap().content, "first");
        assert_eq!(defs.commands().count(), 2);
        assert!(defs.find_command("compile").is_none());
    }

    #[test]
    fn test_display_titles_fall_back() {
        let defs = Definitions::parse(SAMPLE_TOML, DefinitionFormat::Toml).unwrap();
        let group = defs.modifier_group("msgs").unwrap();
        assert_eq!(group.item("hi").unwrap().display_title(), "hi");
        assert_eq!(group.item("bye").unwrap().display_title(), "Goodbye");
        assert_eq!(group.display_title(), "Messages");

        let untitled = ModifierGroup {
            key: "k".to_string(),
            title: String::new(),
            replace_with: "k".to_string(),
            items: vec![],
        };
        assert_eq!(untitled.display_title(), "k");
    }

    #[test]
    fn test_placeholder_name_ignores_blank_override() {
        let group = ModifierGroup {
            key: "target".to_string(),
            title: String::new(),
            replace_with: "target".to_string(),
            items: vec![],
        };
        let mut modifier = Modifier {
            group: "target".to_string(),
            default_arg: String::new(),
            replace_with_override: Some("   ".to_string()),
        };
        assert_eq!(modifier.placeholder_name(&group), "target");

        modifier.replace_with_override = Some("dest".to_string());
        assert_eq!(modifier.placeholder_name(&group), "dest");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp(".toml", SAMPLE_TOML);
        let defs = Definitions::load(file.path()).unwrap();
        assert!(!defs.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Definitions::load(Path::new("/nonexistent/defs.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = write_temp(".xml", "<CommandDefinitions/>");
        let err = Definitions::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_structural_mismatch() {
        // `command` is required on every command entry
        let file = write_temp(".toml", "[[commandGroups]]\nitems = [{ content = \"x\" }]\n");
        let err = Definitions::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                format: DefinitionFormat::Toml,
                ..
            }
        ));
    }

    #[test]
    fn test_load_or_empty_returns_default_model() {
        let (defs, err) = Definitions::load_or_empty(Path::new("/nonexistent/defs.json"));
        assert!(defs.is_empty());
        assert!(err.is_some());
    }

    #[test]
    fn test_default_path_points_into_templates_dir() {
        let path = Definitions::default_path();
        assert!(path.ends_with(DEFAULT_DEFINITIONS_PATH));
    }
}
