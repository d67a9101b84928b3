//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::color::ColorMode;

/// Classify changed file paths into labels using glob rules
#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific rules file
    #[arg(short = 'R', long = "rules", global = true, env = "SIFT_RULES")]
    pub rules: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify changed paths into labels
    Classify(ClassifyArgs),
    /// Classify every file in a working tree
    Scan(ScanArgs),
    /// Initialize a starter rules file
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Changed file paths
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Comma-separated changed paths (equivalent to positional PATHs)
    #[arg(long = "paths", value_name = "LIST", value_delimiter = ',')]
    pub path_list: Vec<String>,

    /// Read newline-separated paths from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Classify files changed relative to the detected base branch
    #[arg(long)]
    pub changed: bool,

    /// Classify files changed relative to a git ref
    #[arg(long, value_name = "REF", conflicts_with = "changed")]
    pub base: Option<String>,

    /// Classify staged files
    #[arg(long)]
    pub staged: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Show the paths that triggered each label
    #[arg(long)]
    pub show_paths: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl ClassifyArgs {
    /// Effective color mode after --no-color.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Tree to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Show the paths that triggered each label
    #[arg(long)]
    pub show_paths: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl ScanArgs {
    /// Effective color mode after --no-color.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing rules file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
