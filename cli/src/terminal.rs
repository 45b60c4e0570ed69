//! Terminal implementations of the gate's blocking prompt and alert

use colored::Colorize;
use console::Term;
use dialoguer::Password;
use floorpay_core::Prompter;
use std::io::{BufRead, IsTerminal};
use tracing::debug;

/// Prompts on the terminal, or reads a line from stdin when it is piped
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && Term::stderr().is_term(),
        }
    }

    fn read_piped_line() -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                debug!(error = %e, "Failed to read password from stdin");
                None
            }
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&self, message: &str) -> Option<String> {
        if !self.interactive {
            return Self::read_piped_line();
        }

        // Escape or a broken terminal count as cancelling the prompt
        Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
            .ok()
    }

    fn alert(&self, message: &str) {
        let term = Term::stderr();
        let _ = term.write_line(&format!("⚠️  {}", message.red().bold()));

        if self.interactive {
            let _ = term.write_line(&"Press Enter to continue".dimmed().to_string());
            let _ = term.read_line();
        }
    }
}
