//! End-to-end tests for `template-builder compose`.

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

fn compose(defs: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(template_builder_bin())
        .args(["--definitions", defs.to_str().unwrap(), "compose"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_compose_command_without_arguments() {
    let (defs_path, _temp_dir) = create_temp_definitions_file(&test_definitions());
    let output = compose(&defs_path, &["build"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "build\n");
}

#[test]
fn test_compose_fills_defaults() {
    let (defs_path, _temp_dir) = create_temp_definitions_file(&test_definitions());

    let output = compose(&defs_path, &["Deploy"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "deploy local safe\n");

    let output = compose(&defs_path, &["deploy", "prod"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "deploy prod safe\n");

    let output = compose(&defs_path, &["deploy", "prod", "fast"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "deploy prod fast\n");
}

#[test]
fn test_compose_rejects_unknown_command_and_argument() {
    let (defs_path, _temp_dir) = create_temp_definitions_file(&test_definitions());

    let output = compose(&defs_path, &["compile"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command: compile"));

    let output = compose(&defs_path, &["deploy", "mars"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("'mars' is not an argument of modifier group 'target'"));

    let output = compose(&defs_path, &["build", "extra"]);
    assert_eq!(output.status.code(), Some(1));

    let output = compose(&defs_path, &["echo", "hi", "bye"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("takes 1 arguments, got 2"));
}

#[test]
fn test_compose_requires_argument_without_valid_default() {
    let mut definitions = test_definitions();
    definitions.command_groups[1].items[1].modifiers[1].default_arg = "none".to_string();
    let (defs_path, _temp_dir) = create_temp_definitions_file(&definitions);

    let output = compose(&defs_path, &["deploy", "prod"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing argument for: Mode"));

    let output = compose(&defs_path, &["deploy", "prod", "fast"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_compose_append_inserts_line_and_prints_output() {
    let (defs_path, temp_dir) = create_temp_definitions_file(&test_definitions());
    let script = write_script(temp_dir.path(), "script.txt", "# start\necho");

    let output = Command::new(template_builder_bin())
        .args(["--definitions", defs_path.to_str().unwrap(), "compose"])
        .args(["echo", "bye", "--append"])
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read_to_string(&script).unwrap(), "# start\necho\necho bye\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# start\nsay Hello\nsay Bye\n"
    );
}

#[test]
fn test_compose_append_creates_script() {
    let (defs_path, temp_dir) = create_temp_definitions_file(&test_definitions());
    let script = temp_dir.path().join("new_script.txt");

    let output = Command::new(template_builder_bin())
        .args(["--definitions", defs_path.to_str().unwrap(), "compose"])
        .args(["copy", "--append"])
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&script).unwrap(), "copy home tmp\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cp ~ /tmp\n");
}
