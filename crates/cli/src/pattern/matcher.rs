// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled glob matchers.
//!
//! Matching semantics: `*` matches within a path segment (never `/`),
//! `**` matches across segments, `?` and character classes match as in
//! standard globs, everything else is literal.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use thiserror::Error;

/// Error compiling a rule's patterns into a matcher.
#[derive(Debug, Error)]
#[error("rule {label:?}: invalid pattern {pattern:?}")]
pub struct PatternError {
    /// Label of the rule the pattern belongs to.
    pub label: String,
    /// The pattern that failed to compile.
    pub pattern: String,
    #[source]
    source: globset::Error,
}

/// A rule with its patterns compiled into a cached glob set.
#[derive(Debug)]
pub struct CompiledRule {
    label: String,
    globs: GlobSet,
}

impl CompiledRule {
    /// Compile `patterns` for `label`.
    ///
    /// A pattern without `/` matches at any depth; a pattern containing
    /// `/` is anchored at the root. A trailing `/` means everything
    /// under that directory.
    pub fn compile(label: &str, patterns: &[String]) -> Result<CompiledRule, PatternError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            for variant in expand(pattern) {
                let glob = GlobBuilder::new(&variant)
                    .literal_separator(true)
                    .build()
                    .map_err(|source| PatternError {
                        label: label.to_string(),
                        pattern: pattern.clone(),
                        source,
                    })?;
                builder.add(glob);
            }
        }
        let globs = builder.build().map_err(|source| PatternError {
            label: label.to_string(),
            pattern: source.glob().unwrap_or_default().to_string(),
            source,
        })?;
        Ok(CompiledRule {
            label: label.to_string(),
            globs,
        })
    }

    /// Label this rule applies.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether any pattern of this rule matches `path`.
    pub fn is_match(&self, path: &str) -> bool {
        self.globs.is_match(path)
    }
}

/// Expand a pattern into the glob variants to compile.
///
/// `dir/` becomes `dir/**`. A pattern with no `/` gets an `**/`-prefixed
/// twin so bare names like `*.py` match at any depth.
fn expand(pattern: &str) -> Vec<String> {
    let pattern = if pattern.ends_with('/') {
        format!("{pattern}**")
    } else {
        pattern.to_string()
    };

    if pattern.contains('/') {
        vec![pattern]
    } else {
        let nested = format!("**/{pattern}");
        vec![pattern, nested]
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
