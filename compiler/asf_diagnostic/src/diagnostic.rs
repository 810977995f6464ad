//! Core diagnostic types.

use std::fmt;

use asf_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// One reported problem: a catalog code, a message and the span it covers.
///
/// Equality includes the span, so the same message at two positions is two
/// distinct diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    /// Extra context, rendered after the message.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with the catalog severity of `code`.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Index of the first covered byte.
    pub const fn start_index(&self) -> usize {
        self.span.start_index()
    }

    /// Index of the last covered byte (inclusive).
    pub const fn end_index(&self) -> usize {
        self.span.end_index()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_parse_error(&self) -> bool {
        self.code.is_parse_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}..={}: {}",
            self.severity,
            self.code,
            self.start_index(),
            self.end_index(),
            self.message
        )
    }
}
