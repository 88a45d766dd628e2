//! Parser diagnostic constructors

use crate::token::TokenKind;
use core_types::{Diagnostic, DiagnosticKind};

/// A required token kind was not the upcoming token
pub fn unexpected_token(expected: TokenKind, got: TokenKind) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::UnexpectedToken,
        format!("expected next token to be {}, got {} instead", expected, got),
    )
}

/// No expression can start with the given token kind
pub fn no_prefix_parser(kind: TokenKind) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::NoPrefixParser,
        format!("no prefix parse function for {} found", kind),
    )
}

/// Integer literal text could not be converted
pub fn invalid_integer(literal: &str) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::InvalidInteger,
        format!("could not parse {:?} as integer", literal),
    )
}

/// Expression nesting went past the parser's limit
pub fn nesting_too_deep(limit: usize) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::NestingTooDeep,
        format!("expression nesting exceeds {} levels", limit),
    )
}
