// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working tree walk for `sift scan`.
//!
//! Respects gitignore rules but includes hidden files, so rules like
//! `.github/**` can match. The `.git` directory itself is skipped.

use std::path::Path;

use ignore::WalkBuilder;

/// List files under `root`, root-relative with `/` separators, sorted.
pub fn tree_files(root: &Path) -> anyhow::Result<Vec<String>> {
    let mut files = Vec::new();

    let walk = WalkBuilder::new(root)
        .hidden(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    for entry in walk {
        let entry = entry?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
            files.push(unix_path(rel));
        }
    }

    files.sort();
    Ok(files)
}

/// Render a path with `/` separators regardless of platform.
fn unix_path(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
