//! Core diagnostic types shared by the Quill front end.
//!
//! The lexer never fails and the parser never aborts: every malformed-input
//! condition is recorded as a [`Diagnostic`] and parsing carries on. This crate
//! holds that diagnostic model so the parser and the CLI agree on it.
//!
//! # Overview
//!
//! - [`Diagnostic`] - A recorded parse problem with a human-readable message
//! - [`DiagnosticKind`] - Category of the problem
//!
//! # Examples
//!
//! ```
//! use core_types::{Diagnostic, DiagnosticKind};
//!
//! let diag = Diagnostic::new(
//!     DiagnosticKind::NoPrefixParser,
//!     "no prefix parse function for ASSIGN found",
//! );
//! assert_eq!(diag.to_string(), "no prefix parse function for ASSIGN found");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;

pub use error::{Diagnostic, DiagnosticKind};
