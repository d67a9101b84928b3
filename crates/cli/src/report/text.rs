// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! One label per line; `--show-paths` indents the evidence under each
//! label. No matches means no output.

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::classify::MatchResult;

use super::{ReportFormatter, ReportOptions};

/// Text format report formatter (plain, no color).
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, result: &MatchResult, opts: &ReportOptions) -> anyhow::Result<String> {
        let mut buffer = termcolor::Buffer::no_color();
        write_report(&mut buffer, result, opts)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}

/// Write the text report to a color-aware writer.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    result: &MatchResult,
    opts: &ReportOptions,
) -> std::io::Result<()> {
    let mut label_spec = ColorSpec::new();
    label_spec.set_fg(Some(Color::Green)).set_bold(true);

    for (label, paths) in result.iter() {
        out.set_color(&label_spec)?;
        write!(out, "{label}")?;
        out.reset()?;
        if opts.counts {
            write!(out, ": {}", paths.len())?;
        }
        writeln!(out)?;

        if opts.show_paths {
            for path in paths {
                writeln!(out, "  {path}")?;
            }
        }
    }

    Ok(())
}
