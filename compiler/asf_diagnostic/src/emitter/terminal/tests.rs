use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;
use asf_ir::Span;

fn unknown_method() -> Diagnostic {
    Diagnostic::new(
        ErrorCode::UnknownMethodName,
        "unknown method `GetStuff`",
        Span::new(16, 24),
    )
}

fn render(emitter_setup: impl FnOnce(Vec<u8>) -> TerminalEmitter<'static, Vec<u8>>, diags: &[Diagnostic]) -> String {
    let mut emitter = emitter_setup(Vec::new());
    emitter.emit_all(diags);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_without_source_prints_byte_range() {
    let text = render(
        |out| TerminalEmitter::with_color_mode(out, ColorMode::Never, false),
        &[unknown_method()],
    );
    assert_eq!(
        text,
        "error[unknown-method-name]: unknown method `GetStuff`\n  --> 16..=23\n\n"
    );
}

#[test]
fn test_with_source_prints_snippet() {
    const SOURCE: &str = "a = $CPUPercent.GetStuff();";
    let text = render(
        |out| {
            TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
                .with_source("formula.asf", SOURCE)
        },
        &[unknown_method()],
    );
    assert_eq!(
        text,
        "error[unknown-method-name]: unknown method `GetStuff`\n\
         \x20 --> formula.asf:1:17\n\
         \x20  |\n\
         \x201 | a = $CPUPercent.GetStuff();\n\
         \x20  |                 ^^^^^^^^\n\
         \n"
    );
}

#[test]
fn test_second_line_location() {
    const SOURCE: &str = "a = 1;\nb = $CPUPercent.Another()^";
    let diag = Diagnostic::new(ErrorCode::ParseError, "unexpected `^`", Span::new(32, 33));
    let text = render(
        |out| {
            TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
                .with_source("f", SOURCE)
        },
        &[diag],
    );
    assert!(text.contains("--> f:2:26"), "{text}");
    assert!(text.contains(" 2 | b = $CPUPercent.Another()^\n"), "{text}");
}

#[test]
fn test_end_of_input_span_gets_one_caret() {
    const SOURCE: &str = "a = ";
    let diag = Diagnostic::new(ErrorCode::ParseError, "expected expression", Span::point(4));
    let text = render(
        |out| {
            TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
                .with_source("f", SOURCE)
        },
        &[diag],
    );
    assert!(text.contains("  |     ^\n"), "{text}");
}

#[test]
fn test_notes() {
    let diag = unknown_method().with_note("did you mean `GetSample`?");
    let text = render(
        |out| TerminalEmitter::with_color_mode(out, ColorMode::Never, false),
        &[diag],
    );
    assert!(text.contains("  = note: did you mean `GetSample`?\n"));
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.enabled(true));
    assert!(!ColorMode::Auto.enabled(false));
    assert!(ColorMode::Always.enabled(false));
    assert!(!ColorMode::Never.enabled(true));

    let text = render(
        |out| TerminalEmitter::with_color_mode(out, ColorMode::Always, false),
        &[unknown_method()],
    );
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("\x1b[1m[unknown-method-name]\x1b[0m"));
    assert!(text.contains("\x1b[1;34m-->\x1b[0m"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(3, 2);
    emitter.emit_summary(0, 1);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: 1 error found\n\
         error: 3 errors found; 2 warnings emitted\n\
         warning: 1 warning emitted\n"
    );
}
