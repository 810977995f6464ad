//! Human-readable output with optional ANSI color.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::{plural_s, DiagnosticEmitter};

/// ANSI select-graphic-rendition styles.
#[derive(Clone, Copy, Debug)]
enum Paint {
    Error,
    Warning,
    Note,
    Emphasis,
    Gutter,
}

impl Paint {
    const fn sgr(self) -> &'static str {
        match self {
            Paint::Error => "\x1b[1;31m",
            Paint::Warning => "\x1b[1;33m",
            Paint::Note => "\x1b[1;36m",
            Paint::Emphasis => "\x1b[1m",
            Paint::Gutter => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Paint::Error,
            Severity::Warning => Paint::Warning,
            Severity::Note => Paint::Note,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// `--color=auto|always|never`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to paint output going to a stream that is (`is_tty`) or is
    /// not a terminal.
    pub fn enabled(self, is_tty: bool) -> bool {
        self == ColorMode::Always || (self == ColorMode::Auto && is_tty)
    }
}

struct SourceContext<'src> {
    name: String,
    text: &'src str,
    lines: LineOffsetTable,
}

/// Renders
///
/// ```text
/// error[unknown-method-name]: unknown method `GetStuff`
///   --> formula.asf:1:17
///    |
///  1 | a = $CPUPercent.GetStuff();
///    |                 ^^^^^^^^
/// ```
///
/// Without attached source only the header and the byte range are printed.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.enabled(is_tty),
            source: None,
        }
    }

    /// Attach the source text so spans render as `name:line:col` plus a snippet.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: &'src str) -> Self {
        self.source = Some(SourceContext {
            name: name.into(),
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, paint: Paint) {
        if self.colors {
            let _ = write!(self.writer, "{}{text}{RESET}", paint.sgr());
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        self.write_colored(&severity.to_string(), Paint::for_severity(severity));
    }

    fn write_location(&mut self, diagnostic: &Diagnostic) {
        let _ = write!(self.writer, "  ");
        self.write_colored("-->", Paint::Gutter);

        let Some(source) = &self.source else {
            let _ = writeln!(
                self.writer,
                " {}..={}",
                diagnostic.start_index(),
                diagnostic.end_index()
            );
            return;
        };

        let start = diagnostic.span.start as usize;
        let (line, column) = source.lines.offset_to_line_col(source.text, start);
        let line_text = source.lines.line_text(source.text, line).unwrap_or("");
        let _ = writeln!(self.writer, " {}:{line}:{column}", source.name);

        // The underline stays on the first line of multi-line spans.
        let line_chars = line_text.chars().count();
        let first = column - 1;
        let width = if diagnostic.span.is_empty() {
            1
        } else {
            let end = (diagnostic.span.end as usize).min(source.text.len());
            let (end_line, end_column) = source.lines.offset_to_line_col(source.text, end);
            if end_line == line {
                (end_column - column).max(1)
            } else {
                line_chars.saturating_sub(first).max(1)
            }
        };

        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        self.write_gutter(&pad);
        let _ = writeln!(self.writer);
        self.write_gutter(&gutter);
        let _ = writeln!(self.writer, " {line_text}");
        self.write_gutter(&pad);
        let _ = write!(self.writer, " {}", " ".repeat(first));
        self.write_colored(&"^".repeat(width), Paint::Error);
        let _ = writeln!(self.writer);
    }

    fn write_gutter(&mut self, label: &str) {
        let _ = write!(self.writer, " {label} ");
        self.write_colored("|", Paint::Gutter);
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[code]: message
        self.write_severity(diagnostic.severity);
        self.write_colored(&format!("[{}]", diagnostic.code), Paint::Emphasis);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_location(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", Paint::Emphasis);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", Paint::Error);
            let _ = write!(
                self.writer,
                ": {error_count} error{} found",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else {
            self.write_colored("warning", Paint::Warning);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
