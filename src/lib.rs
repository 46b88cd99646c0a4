//! Capstan - command-line toolbelt for server-side Swift (Vapor) projects.
//!
//! Capstan wraps the day-to-day workflow of a Vapor project (scaffolding,
//! building, running, deploying) behind named subcommands that shell out to
//! the real tools. Its core job is process lifecycle: every spawned child is
//! tracked in a process-wide registry so that a single Ctrl-C is relayed to
//! whichever child is currently active instead of orphaning it or leaving
//! the terminal wedged.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and subcommands
//! - [`error`] - Error types and result aliases
//! - [`process`] - Process execution, tracking, and interrupt relay
//! - [`ui`] - Terminal output and confirmation prompts
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use capstan::process::{ProcessRegistry, ProcessRunner};
//!
//! let registry = Arc::new(ProcessRegistry::new());
//! let runner = ProcessRunner::new(registry);
//! let version = runner.capture("swift", ["--version"]).unwrap();
//! assert!(!version.is_empty());
//! ```

pub mod cli;
pub mod error;
pub mod process;
pub mod ui;

pub use error::{CapstanError, Result};
