//! Command-line interface for Capstan.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and the dispatcher
//! - [`deprecated`] - Post-parse classification of removed command names

pub mod args;
pub mod commands;
pub mod deprecated;

pub use args::{
    BuildArgs, CleanArgs, Cli, Commands, HerokuArgs, NewArgs, RunArgs, SupervisorArgs,
    SupervisorSubcommand, XcodeArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, ExecutionContext};
