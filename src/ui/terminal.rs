//! Interactive terminal UI.

use console::{style, Term};
use std::io::Write;

use anyhow::Context;

use crate::error::Result;

use super::UserInterface;

/// Terminal UI implementation backed by the `console` crate.
pub struct TerminalUI {
    term: Term,
}

impl TerminalUI {
    /// Create a new terminal UI writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).green()).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{} {}", style("note:").yellow().bold(), msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).red()).ok();
    }

    fn output_kv(&mut self, key: &str, value: &str) {
        writeln!(self.term, "{}: {}", style(key).cyan(), value).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.is_interactive() {
            return Ok(default);
        }

        let answer = dialoguer::Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .context("confirmation prompt failed")?;
        Ok(answer)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the UI for a CLI invocation.
pub fn create_ui() -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new())
}
