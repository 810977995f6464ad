//! Machine-readable output: one JSON array per run.

use std::io::Write;

use serde::Serialize;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorCode, Severity};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: ErrorCode,
    severity: Severity,
    message: &'a str,
    start_index: usize,
    end_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "no_notes")]
    notes: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_notes(notes: &&[String]) -> bool {
    notes.is_empty()
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonReport {
    diagnostics: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<JsonSummary>,
}

/// Buffers diagnostics and writes them as one JSON document on
/// [`flush`](DiagnosticEmitter::flush):
///
/// ```text
/// {"diagnostics": [{"code": "parse-error", "severity": "error", ...}], "summary": {...}}
/// ```
pub struct JsonEmitter<'src, W: Write> {
    writer: W,
    source: Option<(&'src str, LineOffsetTable)>,
    report: JsonReport,
}

impl<'src, W: Write> JsonEmitter<'src, W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            source: None,
            report: JsonReport {
                diagnostics: Vec::new(),
                summary: None,
            },
        }
    }

    /// Attach the source text so each entry carries a 1-based line and column.
    #[must_use]
    pub fn with_source(mut self, text: &'src str) -> Self {
        self.source = Some((text, LineOffsetTable::build(text)));
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let position = self.source.as_ref().map(|(text, lines)| {
            lines.offset_to_line_col(text, diagnostic.span.start as usize)
        });
        let entry = JsonDiagnostic {
            code: diagnostic.code,
            severity: diagnostic.severity,
            message: &diagnostic.message,
            start_index: diagnostic.start_index(),
            end_index: diagnostic.end_index(),
            line: position.map(|(line, _)| line),
            column: position.map(|(_, column)| column),
            notes: &diagnostic.notes,
        };
        if let Ok(value) = serde_json::to_value(entry) {
            self.report.diagnostics.push(value);
        }
    }

    fn flush(&mut self) {
        let _ = serde_json::to_writer_pretty(&mut self.writer, &self.report);
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
        self.report.diagnostics.clear();
        self.report.summary = None;
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        self.report.summary = Some(JsonSummary {
            errors: error_count,
            warnings: warning_count,
        });
    }
}

#[cfg(test)]
mod tests;
