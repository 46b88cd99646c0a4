//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion. Confirmation prompts are answered from a scripted
//! queue, falling back to the caller-provided default.
//!
//! # Example
//!
//! ```
//! use capstan::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("this project does not depend on Vapor");
//! ui.output_kv("framework", "not found");
//!
//! assert_eq!(ui.warnings().len(), 1);
//! assert_eq!(ui.kv_lines()[0], ("framework".to_string(), "not found".to_string()));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    kv_lines: Vec<(String, String)>,
    confirm_queue: VecDeque<bool>,
    confirms_asked: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming confirmation prompts, in order.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_queue.push_back(answer);
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured `key: value` report lines.
    pub fn kv_lines(&self) -> &[(String, String)] {
        &self.kv_lines
    }

    /// Questions asked via `confirm`.
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms_asked
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output_kv(&mut self, key: &str, value: &str) {
        self.kv_lines.push((key.to_string(), value.to_string()));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_asked.push(question.to_string());
        Ok(self.confirm_queue.pop_front().unwrap_or(default))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_output_kinds() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.output_kv("k", "v");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.kv_lines(), [("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn confirm_uses_queue_then_default() {
        let mut ui = MockUI::new();
        ui.queue_confirm(false);

        assert!(!ui.confirm("first?", true).unwrap());
        assert!(ui.confirm("second?", true).unwrap());
        assert_eq!(ui.confirms_asked().len(), 2);
    }
}
