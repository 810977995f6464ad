//! Driver for the `asf` command-line tool.
//!
//! The binary is a thin argument dispatcher over [`commands`]; everything
//! it does is reachable from here so integration tests can drive it with
//! in-memory buffers.

pub mod commands;
mod error;
mod options;

use std::sync::Once;

pub use asf_analysis::{Analysis, AnalysisOptions, BraceStrategy};
pub use error::CliError;
pub use options::{Options, OutputFormat};

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber filtered by `ASF_LOG`, falling
/// back to `RUST_LOG`.
///
/// Does nothing when neither is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var("ASF_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}

/// Run the full analysis pass over `source`.
pub fn check_source<'src>(source: &'src str, options: &AnalysisOptions) -> Analysis<'src> {
    asf_analysis::analyze(source, options)
}

/// How a command finished when it did not fail outright.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Clean,
    /// The input has error diagnostics.
    Errors,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Errors => 1,
        }
    }
}

/// Exit status for driver failures (bad arguments, unreadable input).
pub const EXIT_USAGE: i32 = 2;
