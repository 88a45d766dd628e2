//! Quill CLI Library
//!
//! Provides the Session struct and supporting modules for the Quill CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod session;

pub use cli::{Cli, OutputFormat};
pub use error::{syntax_error_line, CliError, CliResult};
pub use session::{Mode, Outcome, Session};
