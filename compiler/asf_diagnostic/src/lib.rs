//! Diagnostics for autoscale formulas.
//!
//! Every problem found by the parser or the rule engine is a [`Diagnostic`]
//! with a catalog [`ErrorCode`], a message and the source span it refers
//! to. [`queue::DiagnosticQueue`] puts a pass's diagnostics into their
//! reporting order; [`emitter`] renders them for terminals and tools.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
