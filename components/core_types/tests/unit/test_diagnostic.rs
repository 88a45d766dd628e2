//! Unit tests for Diagnostic and DiagnosticKind

use core_types::{Diagnostic, DiagnosticKind};

#[cfg(test)]
mod diagnostic_kind_tests {
    use super::*;

    #[test]
    fn test_kind_is_copy_and_comparable() {
        let kind = DiagnosticKind::NoPrefixParser;
        let copy = kind;
        assert_eq!(kind, copy);
        assert_ne!(kind, DiagnosticKind::InvalidInteger);
    }
}

#[cfg(test)]
mod diagnostic_tests {
    use super::*;

    #[test]
    fn test_diagnostic_new_accepts_string_and_str() {
        let a = Diagnostic::new(DiagnosticKind::UnexpectedToken, "x");
        let b = Diagnostic::new(DiagnosticKind::UnexpectedToken, String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_diagnostic_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let diag = Diagnostic::new(DiagnosticKind::InvalidInteger, "bad");
        takes_error(&diag);
    }

    #[test]
    fn test_diagnostic_serializes_kind_and_message() {
        let diag = Diagnostic::new(
            DiagnosticKind::UnexpectedToken,
            "expected next token to be IDENT, got INT instead",
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "UnexpectedToken");
        assert_eq!(
            json["message"],
            "expected next token to be IDENT, got INT instead"
        );
    }
}
