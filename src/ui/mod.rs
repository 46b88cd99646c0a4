//! Terminal output and confirmation prompts.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//!
//! Commands never print directly; they talk to the [`UserInterface`] handed
//! to them through the execution context, which keeps output testable.

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning. Rendered with a `note:` prefix.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a `key: value` report line.
    fn output_kv(&mut self, key: &str, value: &str);

    /// Ask a yes/no question. Non-interactive sessions get `default`.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
