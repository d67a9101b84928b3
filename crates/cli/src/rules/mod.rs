// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file loading and validation.
//!
//! A rule file is a flat mapping from label name to glob patterns,
//! in YAML (`.yml`/`.yaml`) or TOML (`.toml`), selected by extension.
//! Loading validates every entry up front; a bad file never yields a
//! partially usable rule set.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A single labeling rule: a label and the patterns that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Label applied when any pattern matches.
    pub label: String,
    /// Glob patterns, in file order.
    pub patterns: Vec<String>,
}

/// An immutable, validated set of rules.
///
/// Labels are unique; rule order follows the file but does not affect
/// classification.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Load rules from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<RuleSet, RulesError> {
        let content = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse rules from a string in the format implied by `path`.
    pub fn parse(content: &str, path: &Path) -> Result<RuleSet, RulesError> {
        let rules = match path.extension().and_then(|e| e.to_str()) {
            Some("yml" | "yaml") => parse_yaml(content, path)?,
            Some("toml") => parse_toml(content, path)?,
            _ => {
                return Err(RulesError::UnknownFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        for rule in &rules {
            if rule.patterns.is_empty() {
                return Err(RulesError::NoPatterns {
                    label: rule.label.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(RuleSet { rules })
    }

    /// All rules, in file order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by label.
    pub fn get(&self, label: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.label == label)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse the YAML form: a top-level mapping of label to patterns.
///
/// A value may be a single pattern string or a list of patterns.
fn parse_yaml(content: &str, path: &Path) -> Result<Vec<Rule>, RulesError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|source| RulesError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    // An empty file parses as null; treat it as zero rules.
    if value.is_null() {
        return Ok(Vec::new());
    }

    let Some(mapping) = value.as_mapping() else {
        return Err(RulesError::NotAMapping {
            path: path.to_path_buf(),
        });
    };

    let mut rules: Vec<Rule> = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(label) = key.as_str() else {
            return Err(RulesError::BadLabel {
                path: path.to_path_buf(),
            });
        };
        if rules.iter().any(|r| r.label == label) {
            return Err(RulesError::DuplicateLabel {
                label: label.to_string(),
                path: path.to_path_buf(),
            });
        }

        let patterns = match value {
            // Bare string: one-pattern shorthand
            serde_yaml::Value::String(pattern) => vec![pattern.clone()],
            serde_yaml::Value::Sequence(seq) => {
                let mut patterns = Vec::with_capacity(seq.len());
                for item in seq {
                    let Some(pattern) = item.as_str() else {
                        return Err(RulesError::BadValue {
                            label: label.to_string(),
                            path: path.to_path_buf(),
                        });
                    };
                    patterns.push(pattern.to_string());
                }
                patterns
            }
            _ => {
                return Err(RulesError::BadValue {
                    label: label.to_string(),
                    path: path.to_path_buf(),
                });
            }
        };

        rules.push(Rule {
            label: label.to_string(),
            patterns,
        });
    }

    Ok(rules)
}

/// Parse the TOML form: a top-level table of label to pattern arrays.
fn parse_toml(content: &str, path: &Path) -> Result<Vec<Rule>, RulesError> {
    let value: toml::Value = toml::from_str(content).map_err(|source| RulesError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(table) = value.as_table() else {
        return Err(RulesError::NotAMapping {
            path: path.to_path_buf(),
        });
    };

    let mut rules: Vec<Rule> = Vec::with_capacity(table.len());
    for (label, value) in table {
        let patterns = match value {
            toml::Value::String(pattern) => vec![pattern.clone()],
            toml::Value::Array(arr) => {
                let mut patterns = Vec::with_capacity(arr.len());
                for item in arr {
                    let Some(pattern) = item.as_str() else {
                        return Err(RulesError::BadValue {
                            label: label.clone(),
                            path: path.to_path_buf(),
                        });
                    };
                    patterns.push(pattern.to_string());
                }
                patterns
            }
            _ => {
                return Err(RulesError::BadValue {
                    label: label.clone(),
                    path: path.to_path_buf(),
                });
            }
        };

        rules.push(Rule {
            label: label.clone(),
            patterns,
        });
    }

    Ok(rules)
}

/// Error loading or validating a rule file.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as YAML", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse {} as TOML", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported rules format for {} (expected .yml, .yaml, or .toml)", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("{}: rules must be a mapping of label to patterns", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("{}: label keys must be strings", .path.display())]
    BadLabel { path: PathBuf },

    #[error("label {label:?} in {}: expected a pattern string or a list of patterns", .path.display())]
    BadValue { label: String, path: PathBuf },

    #[error("label {label:?} appears more than once in {}", .path.display())]
    DuplicateLabel { label: String, path: PathBuf },

    #[error("label {label:?} in {} has no patterns", .path.display())]
    NoPatterns { label: String, path: PathBuf },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
