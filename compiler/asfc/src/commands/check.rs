//! The `check` command: report every diagnostic of a formula.

use std::io::{self, IsTerminal, Write};

use asf_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use super::{display_name, read_input};
use crate::{check_source, CliError, Options, Outcome, OutputFormat};

/// Check the file at `path` (or stdin). Text goes to stderr, JSON to stdout.
pub fn check_file(path: &str, options: &Options) -> Result<Outcome, CliError> {
    let source = read_input(path)?;
    let name = display_name(path);
    match options.format {
        OutputFormat::Text => {
            let is_tty = io::stderr().is_terminal();
            check_to(name, &source, options, io::stderr(), is_tty)
        }
        OutputFormat::Json => check_to(name, &source, options, io::stdout(), false),
    }
}

/// Analyze `source` and render its diagnostics and a summary to `writer`.
pub fn check_to<W: Write>(
    name: &str,
    source: &str,
    options: &Options,
    writer: W,
    is_tty: bool,
) -> Result<Outcome, CliError> {
    let analysis = check_source(source, &options.analysis());
    let errors = analysis.error_count();
    let warnings = analysis.diagnostics.len() - errors;
    tracing::debug!(name, errors, warnings, suppressed = analysis.suppressed, "checked");

    let mut emitter: Box<dyn DiagnosticEmitter + '_> = match options.format {
        OutputFormat::Text => Box::new(
            TerminalEmitter::with_color_mode(writer, options.color, is_tty).with_source(name, source),
        ),
        OutputFormat::Json => Box::new(JsonEmitter::new(writer).with_source(source)),
    };
    emitter.emit_all(&analysis.diagnostics);
    emitter.emit_summary(errors + analysis.suppressed, warnings);
    emitter.flush();

    Ok(if analysis.has_errors() {
        Outcome::Errors
    } else {
        Outcome::Clean
    })
}
