// src/cli/menu.rs
use inquire::{InquireError, Password, PasswordDisplayMode};

use crate::analyzer;
use crate::cli::handlers::render_report;
use crate::error::Result;

/// Prompt repeatedly, analysing every entry from scratch. An empty entry,
/// Esc or Ctrl+C ends the session.
pub fn run_interactive() -> Result<()> {
    println!("🔐 Password strength checker");
    println!("Press Enter on an empty prompt to quit.\n");

    loop {
        let input = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt();

        let password = match input {
            Ok(password) => password,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if password.is_empty() {
            break;
        }

        println!("{}\n", render_report(&analyzer::analyze(&password)));
    }

    println!("👋 Goodbye!");
    Ok(())
}
