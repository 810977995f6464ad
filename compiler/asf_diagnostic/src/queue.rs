//! Collects one pass's diagnostics and puts them in reporting order.
//!
//! Reporting order: every parse error before every semantic diagnostic;
//! within each group ascending start index, ties kept in the order they
//! were pushed (rule registration order, then traversal order).

use rustc_hash::FxHashSet;

use asf_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors reported (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics identical in code, span and message to an earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything, duplicates included.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Append-only accumulator, drained once with [`flush`](Self::flush).
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(ErrorCode, Span, String)>,
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Returns `false` if `diag` duplicated an earlier entry.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.config.deduplicate
            && !self
                .seen
                .insert((diag.code, diag.span, diag.message.clone()))
        {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.push(diag);
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Errors dropped by the limit during the last [`flush`](Self::flush).
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Sort into reporting order, apply the error limit and drain.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        self.seen.clear();

        // Stable: equal keys keep push order.
        diagnostics.sort_by_key(|d| (!d.is_parse_error(), d.span.start));

        self.suppressed = 0;
        if self.config.error_limit > 0 {
            let mut errors = 0usize;
            let limit = self.config.error_limit;
            let before = diagnostics.len();
            diagnostics.retain(|d| {
                if !d.is_error() {
                    return true;
                }
                errors += 1;
                errors <= limit
            });
            self.suppressed = before - diagnostics.len();
        }

        diagnostics
    }
}
