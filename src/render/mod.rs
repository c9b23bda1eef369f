// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Result rendering: FQL literal, reflow, highlighting and the stats header.
//!
//! The output is display-agnostic. The TUI paints [`Highlighted`] spans directly and
//! [`Highlighted::to_markup`] produces HTML-like markup for other front ends.

use serde_json::json;

use crate::format::fql::{format_fql, to_fql, RenderDiagnostic, DEFAULT_PRINT_WIDTH};
use crate::model::{ExecutionResult, Value};

pub mod highlight;
pub mod stats;
pub mod text;

pub use highlight::{highlight, HighlightSpan, Highlighted, HighlightedLine, TokenClass};
pub use stats::{format_bytes, stats_entries, stats_line};

pub const FAILURE_BANNER: &str = "An error occurred while running your FQL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    /// Set for failures only.
    pub banner: Option<String>,
    /// Set for successes only.
    pub stats: Option<String>,
    pub body: Highlighted,
    pub diagnostics: Vec<RenderDiagnostic>,
}

impl RenderedResult {
    pub fn is_failure(&self) -> bool {
        self.banner.is_some()
    }
}

pub fn render_result(result: &ExecutionResult) -> RenderedResult {
    render_result_with_width(result, DEFAULT_PRINT_WIDTH)
}

pub fn render_result_with_width(result: &ExecutionResult, width: usize) -> RenderedResult {
    match result {
        ExecutionResult::Success(success) => {
            let (body, diagnostics) = render_value(&success.data, width);
            RenderedResult {
                banner: None,
                stats: Some(stats_line(&success.stats)),
                body,
                diagnostics,
            }
        }
        ExecutionResult::Failure(failure) => {
            let dump = json!({ "error": failure.error });
            let text = serde_json::to_string_pretty(&dump).unwrap_or_else(|_| dump.to_string());
            RenderedResult {
                banner: Some(FAILURE_BANNER.to_owned()),
                stats: None,
                body: highlight(&text),
                diagnostics: Vec::new(),
            }
        }
    }
}

/// Renders a structured value to formatted, highlighted FQL.
pub fn render_value(value: &Value, width: usize) -> (Highlighted, Vec<RenderDiagnostic>) {
    let source = to_fql(value);
    let formatted = format_fql(&source.text, width);
    (highlight(&formatted), source.diagnostics)
}
