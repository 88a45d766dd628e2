//! Session orchestration for tokenizing and parsing
//!
//! A Session holds the output settings chosen on the command line and turns
//! source text into printable output. Each call builds its own lexer and
//! parser, so nothing carries over between inputs.
//!
//! Parsing always produces a program. Diagnostics travel next to it in the
//! [`Outcome`] so callers can show the partial program and the errors together.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use core_types::Diagnostic;
use log::{info, warn};
use parser::{tokenize, Program, Token, TokenKind};
use serde::Serialize;

/// What a session does with source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every token up to end of input
    Tokens,
    /// Parse and print the program
    Parse,
}

/// Rendered output for one input plus any diagnostics the parser recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print on stdout
    pub output: String,
    /// Parser diagnostics, empty in token mode
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    fn clean(output: String) -> Self {
        Self {
            output,
            diagnostics: Vec::new(),
        }
    }

    /// True when the parser recorded nothing
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// JSON shape of a parse: the best-effort program and every diagnostic
#[derive(Serialize)]
struct ParseReport<'a> {
    program: &'a Program,
    errors: &'a [Diagnostic],
}

/// Processing settings shared by one-shot runs and the REPL
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    format: OutputFormat,
    print_ast: bool,
}

impl Session {
    /// Create a new session
    ///
    /// # Example
    /// ```
    /// use quill_cli::{Mode, Session};
    ///
    /// let session = Session::new(Mode::Parse);
    /// let outcome = session.execute_string("1 + 2 * 3").unwrap();
    /// assert_eq!(outcome.output, "(1 + (2 * 3))");
    /// assert!(outcome.is_clean());
    /// ```
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            format: OutputFormat::Text,
            print_ast: false,
        }
    }

    /// Select the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable debug AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Process a source file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read
    ///
    /// # Example
    /// ```no_run
    /// use quill_cli::{Mode, Session};
    ///
    /// let session = Session::new(Mode::Parse);
    /// let outcome = session.execute_file("example.ql").unwrap();
    /// ```
    pub fn execute_file(&self, path: &str) -> CliResult<Outcome> {
        info!("reading {}", path);
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Process a source string according to the session mode
    ///
    /// # Errors
    /// Returns `CliError::Json` if JSON output fails. Parser diagnostics are
    /// not errors here, they come back in [`Outcome::diagnostics`].
    pub fn execute_string(&self, source: &str) -> CliResult<Outcome> {
        match self.mode {
            Mode::Tokens => self.render_tokens(source),
            Mode::Parse => self.render_program(source),
        }
    }

    /// Tokenize and render every token before end of input
    pub fn render_tokens(&self, source: &str) -> CliResult<Outcome> {
        let tokens: Vec<Token> = tokenize(source)
            .take_while(|token| !token.is(TokenKind::Eof))
            .collect();
        info!("tokenized {} tokens", tokens.len());

        let output = match self.format {
            OutputFormat::Text => tokens
                .iter()
                .map(|token| token.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&tokens)?,
        };
        Ok(Outcome::clean(output))
    }

    /// Parse and render the program, including whatever parsed before and
    /// after a diagnostic
    pub fn render_program(&self, source: &str) -> CliResult<Outcome> {
        let (program, diagnostics) = parser::parse(source);
        if !diagnostics.is_empty() {
            warn!("parser recorded {} diagnostic(s)", diagnostics.len());
        }

        let mut output = match self.format {
            OutputFormat::Text => program.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&ParseReport {
                program: &program,
                errors: &diagnostics,
            })?,
        };
        if self.print_ast {
            output.push_str(&format!("\nAST: {:#?}", program));
        }
        Ok(Outcome {
            output,
            diagnostics,
        })
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
