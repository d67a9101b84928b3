// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classify command implementation.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;

use sift::classify::Classifier;
use sift::cli::{Cli, ClassifyArgs};
use sift::discovery;
use sift::git;
use sift::report::{self, ReportOptions};
use sift::rules::RuleSet;

/// Run the classify command.
pub fn run(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let rules_path = resolve_rules_path(cli, &cwd)?;
    let rules = RuleSet::load(&rules_path)?;
    let classifier = Classifier::new(&rules)?;

    let paths = collect_paths(args, &cwd)?;
    tracing::debug!(
        "classifying {} paths against {} rules from {}",
        paths.len(),
        rules.len(),
        rules_path.display()
    );

    let result = classifier.classify(&paths);

    let opts = ReportOptions {
        show_paths: args.show_paths,
        counts: false,
    };
    report::print_report(args.output, &result, &opts, args.color_mode())
}

/// Resolve the rules file: --rules wins, then discovery.
fn resolve_rules_path(cli: &Cli, cwd: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.rules {
        return Ok(path.clone());
    }
    discovery::find_rules(cwd).ok_or_else(|| {
        anyhow::anyhow!("no rules file found; pass --rules or create sift.yml (see `sift init`)")
    })
}

/// Gather the change set from every requested source.
///
/// Positional paths, --paths, stdin, and git sources union together;
/// the classifier dedups.
fn collect_paths(args: &ClassifyArgs, cwd: &Path) -> anyhow::Result<Vec<String>> {
    let mut paths: Vec<String> = Vec::new();

    paths.extend(args.paths.iter().cloned());
    paths.extend(args.path_list.iter().cloned());

    if args.stdin {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read paths from stdin")?;
            let line = line.trim();
            if !line.is_empty() {
                paths.push(line.to_string());
            }
        }
    }

    let wants_git = args.staged || args.changed || args.base.is_some();
    if wants_git && !git::is_git_repo(cwd) {
        anyhow::bail!("not in a git repository; --staged, --changed, and --base need one");
    }

    if args.staged {
        paths.extend(git::staged_files(cwd).context("failed to list staged files")?);
    }

    if let Some(base) = &args.base {
        paths.extend(
            git::changed_files(cwd, base)
                .with_context(|| format!("failed to diff against {base}"))?,
        );
    } else if args.changed {
        let base = git::detect_base_branch(cwd)
            .ok_or_else(|| anyhow::anyhow!("could not detect a base branch (main or master)"))?;
        tracing::debug!("detected base branch {base}");
        paths.extend(
            git::changed_files(cwd, &base)
                .with_context(|| format!("failed to diff against {base}"))?,
        );
    }

    Ok(paths)
}
