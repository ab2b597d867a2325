//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use template_builder::definitions::{
    Command, CommandGroup, Definitions, Modifier, ModifierGroup, ModifierItem,
};
use tempfile::TempDir;

/// Path to the template-builder binary
pub fn template_builder_bin() -> &'static str {
    env!("CARGO_BIN_EXE_template-builder")
}

fn item(arg: &str, title: Option<&str>, value: &str) -> ModifierItem {
    ModifierItem {
        arg: arg.to_string(),
        title: title.map(str::to_string),
        value: value.to_string(),
    }
}

fn modifier(group: &str, default_arg: &str, replace_with_override: Option<&str>) -> Modifier {
    Modifier {
        group: group.to_string(),
        default_arg: default_arg.to_string(),
        replace_with_override: replace_with_override.map(str::to_string),
    }
}

/// Creates a small definition model covering the main expansion paths.
///
/// - `echo` takes one `msgs` argument defaulting to `hi`
/// - `build` takes no arguments
/// - `deploy` takes a `target` then a `mode`
/// - `copy` uses the `path` group twice through placeholder overrides
pub fn test_definitions() -> Definitions {
    Definitions {
        command_groups: vec![
            CommandGroup {
                title: "Output".to_string(),
                items: vec![Command {
                    title: "Echo".to_string(),
                    command: "echo".to_string(),
                    content: "say {msg}".to_string(),
                    modifiers: vec![modifier("msgs", "hi", None)],
                }],
            },
            CommandGroup {
                title: "Tasks".to_string(),
                items: vec![
                    Command {
                        title: "Build".to_string(),
                        command: "build".to_string(),
                        content: "make all".to_string(),
                        modifiers: vec![],
                    },
                    Command {
                        title: "Deploy".to_string(),
                        command: "deploy".to_string(),
                        content: "deploy {target} {mode}".to_string(),
                        modifiers: vec![
                            modifier("target", "local", None),
                            modifier("mode", "safe", None),
                        ],
                    },
                    Command {
                        title: "Copy".to_string(),
                        command: "copy".to_string(),
                        content: "cp {src} {dst}".to_string(),
                        modifiers: vec![
                            modifier("path", "home", Some("src")),
                            modifier("path", "tmp", Some("dst")),
                        ],
                    },
                ],
            },
        ],
        modifier_groups: vec![
            ModifierGroup {
                key: "msgs".to_string(),
                title: "Message".to_string(),
                replace_with: "msg".to_string(),
                items: vec![item("hi", None, "Hello"), item("bye", Some("Goodbye"), "Bye")],
            },
            ModifierGroup {
                key: "target".to_string(),
                title: "Target".to_string(),
                replace_with: "target".to_string(),
                items: vec![item("local", Some("Local"), "/tmp"), item("prod", None, "/srv")],
            },
            ModifierGroup {
                key: "mode".to_string(),
                title: "Mode".to_string(),
                replace_with: "mode".to_string(),
                items: vec![item("safe", None, "--dry-run"), item("fast", None, "--force")],
            },
            ModifierGroup {
                key: "path".to_string(),
                title: "Path".to_string(),
                replace_with: "path".to_string(),
                items: vec![item("home", None, "~"), item("tmp", None, "/tmp")],
            },
        ],
    }
}

/// Writes definitions as TOML into a fresh temp dir.
pub fn create_temp_definitions_file(definitions: &Definitions) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("Template.toml");
    let content = toml::to_string_pretty(definitions).expect("Failed to serialize definitions");
    fs::write(&path, content).expect("Failed to write definitions file");
    (path, temp_dir)
}

/// Writes a raw definition document with the given file name into a fresh temp dir.
pub fn create_temp_raw_definitions(file_name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write definitions file");
    (path, temp_dir)
}

/// Writes a script next to other temp files.
pub fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}
