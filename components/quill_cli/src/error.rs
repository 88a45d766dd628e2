//! Error types for the CLI

use core_types::Diagnostic;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// One stderr line for a parser diagnostic, labelled with its kind
pub fn syntax_error_line(diagnostic: &Diagnostic) -> String {
    format!("Syntax Error [{}]: {}", diagnostic.kind.as_str(), diagnostic)
}
