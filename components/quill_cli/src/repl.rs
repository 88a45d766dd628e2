//! REPL (Read-Eval-Print Loop) implementation
//!
//! Reads one line at a time. In token mode each token is printed on its own
//! line; in parse mode the rendered program is printed, followed by the
//! parser errors if any were recorded.

use crate::error::{CliError, CliResult};
use crate::session::{Mode, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Prompt shown before each line
pub const PROMPT: &str = ">> ";

/// Run the interactive REPL
///
/// # Arguments
/// * `session` - The Session used to process each line
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(session: &mut Session) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("{}", greeting(&current_user()));
    println!("Enter your commands below:");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == ".exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed.starts_with('.') {
                    handle_repl_command(trimmed, session);
                    continue;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(&line);

                let output = respond(session, &line);
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("Press Ctrl-D or type 'exit' to quit");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Process one line and build the text to print for it
pub fn respond(session: &Session, line: &str) -> String {
    let outcome = match session.execute_string(line) {
        Ok(outcome) => outcome,
        Err(e) => return format!("Error: {}", e),
    };
    if outcome.is_clean() {
        return outcome.output;
    }

    let mut text = outcome.output;
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str("parser errors:");
    for diagnostic in &outcome.diagnostics {
        text.push_str("\n\t");
        text.push_str(&diagnostic.message);
    }
    text
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, session: &mut Session) {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .tokens   - Print tokens for each line");
            println!("  .ast      - Parse each line and print the program");
            println!("  .mode     - Show the current mode");
            println!("  .exit     - Exit the REPL");
            println!("  exit      - Exit the REPL");
            println!("  quit      - Exit the REPL");
        }
        ".tokens" => session.set_mode(Mode::Tokens),
        ".ast" => session.set_mode(Mode::Parse),
        ".mode" => println!("Mode: {}", mode_name(session.mode())),
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Tokens => "tokens",
        Mode::Parse => "ast",
    }
}

/// Login name of the current user, or a neutral fallback
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

/// Start-up greeting
pub fn greeting(user: &str) -> String {
    format!("Hello {}! This is the Quill programming language!", user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_tokens() {
        let session = Session::new(Mode::Tokens);
        assert_eq!(
            respond(&session, "x;"),
            "{Kind:IDENT Literal:x}\n{Kind:SEMICOLON Literal:;}"
        );
    }

    #[test]
    fn test_respond_program() {
        let session = Session::new(Mode::Parse);
        assert_eq!(respond(&session, "-a * b"), "((-a) * b)");
    }

    #[test]
    fn test_respond_lists_parser_errors() {
        let session = Session::new(Mode::Parse);
        assert_eq!(
            respond(&session, "let = 1"),
            "1\nparser errors:\n\texpected next token to be IDENT, got ASSIGN instead\n\tno prefix parse function for ASSIGN found"
        );
    }

    #[test]
    fn test_respond_shows_program_before_errors() {
        let session = Session::new(Mode::Parse);
        assert_eq!(
            respond(&session, "let x = 0x19; y"),
            "let x = ;y\nparser errors:\n\tno prefix parse function for ILLEGAL found"
        );
    }

    #[test]
    fn test_respond_errors_only() {
        let session = Session::new(Mode::Parse);
        assert_eq!(
            respond(&session, "@"),
            "parser errors:\n\tno prefix parse function for ILLEGAL found"
        );
    }

    #[test]
    fn test_handle_mode_commands() {
        let mut session = Session::new(Mode::Parse);
        handle_repl_command(".tokens", &mut session);
        assert_eq!(session.mode(), Mode::Tokens);
        handle_repl_command(".ast", &mut session);
        assert_eq!(session.mode(), Mode::Parse);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(
            greeting("ada"),
            "Hello ada! This is the Quill programming language!"
        );
    }
}
