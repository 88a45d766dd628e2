//! Command-line arguments

use crate::session::Mode;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Token lines or the rendered program
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Quill language front end
#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Tokenize and parse Quill source")]
pub struct Cli {
    /// Source file to process
    #[arg(short, long, conflicts_with = "eval")]
    pub file: Option<String>,

    /// Inline source to process
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Start the interactive REPL (the default when no source is given)
    #[arg(short, long, conflicts_with_all = ["file", "eval"])]
    pub repl: bool,

    /// Print tokens instead of parsing
    #[arg(short, long)]
    pub tokens: bool,

    /// Also print the debug AST (parse mode only)
    #[arg(long, conflicts_with = "tokens")]
    pub print_ast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Processing mode selected by the flags
    pub fn mode(&self) -> Mode {
        if self.tokens {
            Mode::Tokens
        } else {
            Mode::Parse
        }
    }

    /// Log level selected by `-v` occurrences
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
