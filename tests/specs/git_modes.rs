//! Behavioral specs for git-backed change detection.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// A project with an initial commit so diffs have a base.
fn git_project() -> Project {
    let temp = Project::empty();
    temp.rules("docs:\n  - \"*.md\"\nfrontend:\n  - \"*.ts\"\n");
    temp.file("README.md", "# project\n");
    temp.git(&["init"]);
    temp.git(&["add", "."]);
    temp.git(&["commit", "-m", "chore: initial commit"]);
    temp
}

#[test]
fn staged_flag_classifies_the_index() {
    let temp = git_project();
    temp.file("app.ts", "export {}\n");
    temp.git(&["add", "app.ts"]);

    sift_cmd()
        .args(["classify", "--staged"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("frontend\n");
}

#[test]
fn staged_flag_with_clean_index_matches_nothing() {
    let temp = git_project();

    sift_cmd()
        .args(["classify", "--staged"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn changed_flag_diffs_against_the_detected_base() {
    let temp = git_project();
    temp.file("README.md", "# project, changed\n");

    sift_cmd()
        .args(["classify", "--changed"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn base_flag_diffs_against_an_explicit_ref() {
    let temp = git_project();
    temp.file("app.ts", "export {}\n");
    temp.git(&["add", "app.ts"]);

    sift_cmd()
        .args(["classify", "--base", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("frontend\n");
}

#[test]
fn bad_base_ref_fails_with_context() {
    let temp = git_project();

    sift_cmd()
        .args(["classify", "--base", "no-such-ref"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no-such-ref"));
}

#[test]
fn git_paths_combine_with_explicit_paths() {
    let temp = git_project();
    temp.file("app.ts", "export {}\n");
    temp.git(&["add", "app.ts"]);

    sift_cmd()
        .args(["classify", "--staged", "README.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("docs\nfrontend\n");
}
