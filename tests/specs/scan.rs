//! Behavioral specs for the scan command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn scan_counts_matches_per_label() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"**/*.md\"\nrust:\n  - \"**/*.rs\"\n")
        .file("README.md", "# readme\n")
        .file("docs/guide.md", "# guide\n")
        .file("src/main.rs", "fn main() {}\n");

    sift_cmd()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs: 2\nrust: 1\n");
}

#[test]
fn scan_show_paths_lists_files_sorted() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"**/*.md\"\n")
        .file("b.md", "")
        .file("a.md", "");

    sift_cmd()
        .args(["scan", "--show-paths"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs: 2\n  a.md\n  b.md\n");
}

#[test]
fn scan_sees_hidden_files() {
    let temp = Project::empty();
    temp.rules("ci:\n  - \".github/workflows/**\"\n")
        .file(".github/workflows/lint.yml", "name: lint\n");

    sift_cmd()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("ci: 1\n");
}

#[test]
fn scan_accepts_an_explicit_root() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"**/*.md\"\n").file("sub/x.md", "");

    sift_cmd()
        .args(["scan", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("docs"));
}

#[test]
fn scan_with_no_matches_prints_nothing() {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"**/*.md\"\n").file("main.rs", "");

    sift_cmd()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}
