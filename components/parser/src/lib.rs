//! Quill Parser Component
//!
//! Front end of the Quill expression language: turns source text into a
//! stream of classified tokens, then into an abstract syntax tree.
//!
//! # Overview
//!
//! - [`Lexer`] / [`tokenize`] - Tokenizes Quill source text
//! - [`Token`] - Token kind plus the literal source text
//! - [`Parser`] / [`parse`] - Pratt parser producing a [`Program`]
//! - [`Statement`] / [`Expression`] - Abstract Syntax Tree node types
//!
//! Neither stage fails outright. Unknown bytes become `ILLEGAL` tokens and
//! parse problems are collected as [`core_types::Diagnostic`]s next to the
//! best-effort tree.
//!
//! # Example
//!
//! ```
//! use parser::{parse, Statement};
//!
//! let (program, errors) = parse("let x = 5 * -y;");
//! assert!(errors.is_empty());
//! assert!(matches!(program.statements[0], Statement::Let { .. }));
//! assert_eq!(program.to_string(), "let x = (5 * (-y));");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod scanner;
pub mod token;

pub use ast::{Expression, Identifier, Node, Program, Statement};
pub use lexer::{tokenize, Lexer, Tokens};
pub use number::{parse_int_auto, IntegerError};
pub use parser::{parse, Parser, Precedence, MAX_NESTING_DEPTH};
pub use token::{lookup_ident, Token, TokenKind};
