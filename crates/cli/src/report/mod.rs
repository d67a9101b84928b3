// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label report output.
//!
//! Formats a [`MatchResult`] as text (one label per line, the shape an
//! external labeling collaborator consumes) or JSON.

mod json;
mod text;

use termcolor::StandardStream;

use crate::classify::MatchResult;
use crate::cli::OutputFormat;
use crate::color::ColorMode;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Options shared by report formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Include the triggering paths under each label.
    pub show_paths: bool,
    /// Append per-label match counts (scan mode).
    pub counts: bool,
}

/// Trait for formatting match results.
pub trait ReportFormatter {
    /// Format `result` into the target format.
    fn format(&self, result: &MatchResult, opts: &ReportOptions) -> anyhow::Result<String>;
}

/// Format `result` per `format`, returning the output string.
pub fn format_report(
    format: OutputFormat,
    result: &MatchResult,
    opts: &ReportOptions,
) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(result, opts)
}

/// Write `result` to stdout in `format`.
///
/// Text output goes through a color-aware stream; JSON is always plain.
pub fn print_report(
    format: OutputFormat,
    result: &MatchResult,
    opts: &ReportOptions,
    color: ColorMode,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut out = StandardStream::stdout(color.to_choice());
            text::write_report(&mut out, result, opts)?;
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter.format(result, opts)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
