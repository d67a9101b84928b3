// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path classification against a compiled rule set.
//!
//! [`Classifier`] compiles every rule once, then [`Classifier::classify`]
//! maps a set of changed paths to the labels whose patterns match.
//! Classification is a pure set computation: rule order and path order
//! never change which labels are produced.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::pattern::{CompiledRule, PatternError};
use crate::rules::RuleSet;

/// Labels matched by a change set, with the paths that triggered them.
///
/// Labels iterate in sorted order; evidence keeps first-seen input
/// order, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    labels: BTreeMap<String, Vec<String>>,
}

impl MatchResult {
    /// Whether no label matched.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of matched labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether `label` matched.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Matched labels, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// Paths that triggered `label`, if it matched.
    pub fn evidence(&self, label: &str) -> Option<&[String]> {
        self.labels.get(label).map(Vec::as_slice)
    }

    /// Iterate over (label, evidence) pairs, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.labels
            .iter()
            .map(|(label, paths)| (label.as_str(), paths.as_slice()))
    }
}

/// Classifies change sets against a fixed rule set.
///
/// Construction compiles every pattern; classification performs no I/O
/// and holds no mutable state, so a `Classifier` can be shared freely.
#[derive(Debug)]
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Compile `rules` into cached matchers.
    ///
    /// Fails on the first malformed pattern, naming its rule.
    pub fn new(rules: &RuleSet) -> Result<Classifier, PatternError> {
        let rules = rules
            .rules()
            .iter()
            .map(|rule| CompiledRule::compile(&rule.label, &rule.patterns))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Classifier { rules })
    }

    /// Match `paths` against every rule.
    ///
    /// Duplicate paths count once and a leading `./` is ignored. Every
    /// matching label is returned; classification is not first-match.
    pub fn classify<I, S>(&self, paths: I) -> MatchResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut labels: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for path in paths {
            let path = normalize(path.as_ref());
            if path.is_empty() || !seen.insert(path.to_string()) {
                continue;
            }
            for rule in &self.rules {
                if rule.is_match(path) {
                    labels
                        .entry(rule.label().to_string())
                        .or_default()
                        .push(path.to_string());
                }
            }
        }

        MatchResult { labels }
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Strip a leading `./` so `./src/a.rs` and `src/a.rs` are one path.
fn normalize(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
