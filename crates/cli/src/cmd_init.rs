// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::Context;

use sift::cli::{Cli, InitArgs};

/// Starter rules written by `sift init`.
const STARTER_RULES: &str = "\
# sift rules: label -> glob patterns.
# A pattern without `/` matches at any depth; `**` crosses directories.
docs:
  - \"**/*.md\"
ci:
  - \".github/workflows/**\"
dependencies:
  - \"Cargo.toml\"
  - \"Cargo.lock\"
  - \"package.json\"
tests:
  - \"tests/**\"
";

/// Run the init command.
pub fn run(_cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let path = cwd.join("sift.yml");

    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(&path, STARTER_RULES)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
