// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.
//!
//! Classifies every file in a working tree to preview which labels
//! the repository's content maps to.

use std::path::{Path, PathBuf};

use anyhow::Context;

use sift::classify::Classifier;
use sift::cli::{Cli, ScanArgs};
use sift::discovery;
use sift::report::{self, ReportOptions};
use sift::rules::RuleSet;
use sift::walker;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<()> {
    let root = match &args.root {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let rules_path = resolve_rules_path(cli, &root)?;
    let rules = RuleSet::load(&rules_path)?;
    let classifier = Classifier::new(&rules)?;

    let files = walker::tree_files(&root)
        .with_context(|| format!("failed to walk {}", root.display()))?;
    tracing::debug!("scanning {} files against {} rules", files.len(), rules.len());

    let result = classifier.classify(&files);

    let opts = ReportOptions {
        show_paths: args.show_paths,
        counts: true,
    };
    report::print_report(args.output, &result, &opts, args.color_mode())
}

/// Resolve the rules file: --rules wins, then discovery from the scan root.
fn resolve_rules_path(cli: &Cli, root: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.rules {
        return Ok(path.clone());
    }
    discovery::find_rules(root).ok_or_else(|| {
        anyhow::anyhow!("no rules file found; pass --rules or create sift.yml (see `sift init`)")
    })
}
