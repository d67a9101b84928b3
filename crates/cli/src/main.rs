//! Binary entry point: parse arguments, install logging, dispatch.

mod cmd_classify;
mod cmd_completions;
mod cmd_init;
mod cmd_scan;

use clap::Parser;

use sift::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Classify(args) => cmd_classify::run(&cli, args),
        Command::Scan(args) => cmd_scan::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
        Command::Completions(args) => cmd_completions::run(args),
    }
}

/// Install the tracing subscriber.
///
/// `--verbose` lowers the filter to debug; SIFT_LOG overrides both.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "sift=debug" } else { "sift=warn" };
    let filter =
        EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
