//! End-to-End CLI Integration Tests
//!
//! Tests the front end through the quill_cli Session API.

use quill_cli::repl::respond;
use quill_cli::{syntax_error_line, Mode, Session};

/// Test: token dump for a full line, as the REPL prints it
#[test]
fn test_e2e_token_dump() {
    let session = Session::new(Mode::Tokens);
    let output = session.execute_string("let x = 0x19;").unwrap().output;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "{Kind:LET Literal:let}",
            "{Kind:IDENT Literal:x}",
            "{Kind:ASSIGN Literal:=}",
            "{Kind:ILLEGAL Literal:0x19}",
            "{Kind:SEMICOLON Literal:;}",
        ]
    );
}

/// Test: parse errors reach the caller alongside the partial program
#[test]
fn test_e2e_parse_errors() {
    let session = Session::new(Mode::Parse);
    let outcome = session.execute_string("let x = 0x19; let y = 2;").unwrap();
    assert_eq!(outcome.output, "let x = ;let y = 2;");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        syntax_error_line(&outcome.diagnostics[0]),
        "Syntax Error [no-prefix-parser]: no prefix parse function for ILLEGAL found"
    );
}

/// Test: REPL response switches with the session mode
#[test]
fn test_e2e_repl_modes() {
    let mut session = Session::new(Mode::Parse);
    assert_eq!(respond(&session, "1 + 2 * 3"), "(1 + (2 * 3))");
    session.set_mode(Mode::Tokens);
    assert_eq!(respond(&session, "!"), "{Kind:BANG Literal:!}");
}

/// Test: pathologically deep input is rejected instead of exhausting the stack
#[test]
fn test_e2e_deep_nesting() {
    let session = Session::new(Mode::Parse);
    let source = format!("{}x; y", "-".repeat(10_000));
    let outcome = session.execute_string(&source).unwrap();
    assert_eq!(outcome.output, "y");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        syntax_error_line(&outcome.diagnostics[0]),
        "Syntax Error [nesting-too-deep]: expression nesting exceeds 512 levels"
    );
}
