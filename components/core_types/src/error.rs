//! Parse diagnostics.
//!
//! Diagnostics are accumulated rather than raised. The message is the whole
//! user-facing text; the kind lets callers filter without string matching.

use serde::Serialize;
use thiserror::Error;

/// The category of a parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A required token kind was not found at the expected position
    UnexpectedToken,
    /// The current token cannot start an expression
    NoPrefixParser,
    /// Integer literal text could not be converted to a 64-bit value
    InvalidInteger,
    /// Expression nesting exceeded the parser's depth limit
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Short lowercase name, used by the CLI when labelling diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken => "unexpected-token",
            DiagnosticKind::NoPrefixParser => "no-prefix-parser",
            DiagnosticKind::InvalidInteger => "invalid-integer",
            DiagnosticKind::NestingTooDeep => "nesting-too-deep",
        }
    }
}

/// A diagnostic recorded while parsing.
///
/// # Examples
///
/// ```
/// use core_types::{Diagnostic, DiagnosticKind};
///
/// let diag = Diagnostic::new(DiagnosticKind::InvalidInteger, "could not parse \"9x\" as integer");
/// assert_eq!(diag.kind, DiagnosticKind::InvalidInteger);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic of the given kind
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_is_message() {
        let diag = Diagnostic::new(DiagnosticKind::UnexpectedToken, "boom");
        assert_eq!(diag.to_string(), "boom");
    }

    #[test]
    fn test_diagnostic_kind_names() {
        assert_eq!(DiagnosticKind::UnexpectedToken.as_str(), "unexpected-token");
        assert_eq!(DiagnosticKind::NoPrefixParser.as_str(), "no-prefix-parser");
        assert_eq!(DiagnosticKind::InvalidInteger.as_str(), "invalid-integer");
        assert_eq!(DiagnosticKind::NestingTooDeep.as_str(), "nesting-too-deep");
    }
}
