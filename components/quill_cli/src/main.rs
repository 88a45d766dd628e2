//! Quill CLI
//!
//! Entry point for the Quill front end. Parses CLI arguments and
//! delegates to the Session for tokenizing and parsing.

use clap::Parser as ClapParser;
use quill_cli::{syntax_error_line, Cli, CliError, OutputFormat, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut session = Session::new(cli.mode())
        .with_format(cli.format)
        .with_print_ast(cli.print_ast);

    // --repl conflicts with a source argument, so it only makes the default explicit
    let result = if cli.repl {
        None
    } else if let Some(file) = &cli.file {
        Some(session.execute_file(file))
    } else {
        cli.eval.as_deref().map(|code| session.execute_string(code))
    };

    match result {
        Some(Ok(outcome)) => {
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            if !outcome.is_clean() {
                // JSON output already carries the diagnostics
                if cli.format == OutputFormat::Text {
                    for diagnostic in &outcome.diagnostics {
                        eprintln!("{}", syntax_error_line(diagnostic));
                    }
                }
                std::process::exit(1);
            }
        }
        Some(Err(CliError::Io(e))) => {
            eprintln!(
                "Error: Could not read file '{}': {}",
                cli.file.as_deref().unwrap_or_default(),
                e
            );
            std::process::exit(1);
        }
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        None => session.repl()?,
    }

    Ok(())
}
