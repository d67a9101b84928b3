// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use crate::classify::MatchResult;

use super::{ReportFormatter, ReportOptions};

/// JSON format report formatter.
///
/// Emits `{"labels": {label: [paths...]}}`; counts are derivable from
/// the evidence lists, so `ReportOptions` does not change the shape.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, result: &MatchResult, _opts: &ReportOptions) -> anyhow::Result<String> {
        let output = json!({ "labels": result });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
