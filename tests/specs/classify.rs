//! Behavioral specs for the classify command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// MATCHING SCENARIOS
// =============================================================================

#[test]
fn single_label_printed_per_line() {
    let temp = Project::empty();
    temp.rules("frontend:\n  - \"*.ts\"\n");

    sift_cmd()
        .args(["classify", "app.ts"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("frontend\n");
}

#[test]
fn only_matching_labels_are_printed() {
    let temp = Project::empty();
    temp.rules("frontend:\n  - \"*.ts\"\ndocs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "README.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn workflow_paths_match_anchored_patterns() {
    let temp = Project::empty();
    temp.rules("ci-cd:\n  - \".github/workflows/**\"\n");

    sift_cmd()
        .args(["classify", ".github/workflows/lint.yml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("ci-cd\n");
}

#[test]
fn no_match_is_success_with_empty_output() {
    let temp = Project::empty();
    temp.rules("dependencies:\n  - \"package.json\"\n");

    sift_cmd()
        .args(["classify", "src/index.js"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn one_path_yields_every_matching_label() {
    let temp = Project::empty();
    temp.rules("config:\n  - \".github/**\"\nci-cd:\n  - \".github/workflows/**\"\n");

    sift_cmd()
        .args(["classify", ".github/workflows/lint.yml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("ci-cd\nconfig\n");
}

#[test]
fn empty_change_set_is_success_with_empty_output() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\n");

    sift_cmd()
        .arg("classify")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

// =============================================================================
// INPUT SOURCES
// =============================================================================

#[test]
fn paths_flag_takes_a_comma_separated_list() {
    let temp = Project::empty();
    temp.rules("frontend:\n  - \"*.ts\"\ndocs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "--paths", "app.ts,README.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\nfrontend\n");
}

#[test]
fn stdin_reads_newline_separated_paths() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "--stdin"])
        .current_dir(temp.path())
        .write_stdin("README.md\nCHANGELOG.md\n")
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn rules_flag_selects_an_explicit_file() {
    let temp = Project::empty();
    temp.file("custom.yml", "docs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "--rules", "custom.yml", "README.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn rules_are_discovered_from_a_parent_directory() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"**/*.md\"\n");
    temp.file("src/keep", "");

    sift_cmd()
        .args(["classify", "docs/guide.md"])
        .current_dir(temp.path().join("src"))
        .assert()
        .success()
        .stdout("docs\n");
}

// =============================================================================
// OUTPUT
// =============================================================================

#[test]
fn json_output_maps_labels_to_evidence() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\n");

    let output = sift_cmd()
        .args(["classify", "--output", "json", "README.md"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["labels"]["docs"], serde_json::json!(["README.md"]));
}

#[test]
fn show_paths_lists_evidence_under_each_label() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "--show-paths", "README.md", "CHANGELOG.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\n  README.md\n  CHANGELOG.md\n");
}

#[test]
fn duplicate_paths_are_reported_once() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\n");

    sift_cmd()
        .args(["classify", "--show-paths", "README.md", "README.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\n  README.md\n");
}
