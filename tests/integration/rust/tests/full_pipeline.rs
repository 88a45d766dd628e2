//! Full pipeline integration tests
//!
//! Source text through the lexer and parser to the rendered tree.

use core_types::DiagnosticKind;
use parser::{parse, tokenize, Expression, Lexer, Parser, Statement, TokenKind};

/// Test: tokens seen by the parser are the ones tokenize yields
#[test]
fn test_lexer_and_tokenize_agree() {
    let source = "let total = price * 3 + 0b11;";
    let mut lexer = Lexer::new(source);
    for expected in tokenize(source) {
        assert_eq!(lexer.next_token(), expected);
    }
    assert!(lexer.next_token().is(TokenKind::Eof));
}

/// Test: a small program with every statement kind
#[test]
fn test_mixed_program() {
    let source = "let a = 1;\nlet b = -a * 2;\nb != a;\nreturn a < b == !c;";
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 4);
    assert_eq!(
        program.to_string(),
        "let a = 1;let b = ((-a) * 2);(b != a)return ((a < b) == (!c));"
    );
}

/// Test: parsing continues after a broken statement
#[test]
fn test_recovery_after_error() {
    let (program, errors) = parse("let = 5; let ok = 1;");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind, DiagnosticKind::UnexpectedToken);
    assert_eq!(errors[1].kind, DiagnosticKind::NoPrefixParser);

    let last = program.statements.last().expect("statements");
    match last {
        Statement::Let { name, value, .. } => {
            assert_eq!(name.value, "ok");
            assert!(matches!(value, Expression::IntegerLiteral { value: 1, .. }));
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

/// Test: independent parsers share no state
#[test]
fn test_parsers_are_independent() {
    let mut broken = Parser::new("let 1;");
    let mut clean = Parser::new("x + y");
    broken.parse_program();
    let program = clean.parse_program();
    assert_eq!(broken.errors().len(), 1);
    assert!(clean.errors().is_empty());
    assert_eq!(program.to_string(), "(x + y)");
}

/// Test: parsing on separate threads
#[test]
fn test_parse_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("let v{} = {} * 2;", "x".repeat(i + 1), i);
                parse(&source).0.to_string()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let rendered = handle.join().unwrap();
        assert_eq!(rendered, format!("let v{} = ({} * 2);", "x".repeat(i + 1), i));
    }
}
