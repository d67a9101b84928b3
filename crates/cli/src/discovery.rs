// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! sift.yml (or sift.yaml).

use std::path::{Path, PathBuf};

/// Find a rules file starting from `start_dir` and walking up to git root.
pub fn find_rules(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in ["sift.yml", "sift.yaml"] {
            let rules_path = current.join(name);
            if rules_path.exists() {
                return Some(rules_path);
            }
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
