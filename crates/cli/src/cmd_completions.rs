// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completions command implementation.

use clap::CommandFactory;
use clap_complete::generate;

use sift::cli::{Cli, CompletionsArgs};

/// Run the completions command.
pub fn run(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "sift", &mut std::io::stdout());
    Ok(())
}
