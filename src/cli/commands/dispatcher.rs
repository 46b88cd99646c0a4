//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ExecutionContext`] carrying what a command needs to run
//! - [`CommandDispatcher`] for routing CLI subcommands
//!
//! The dispatch table is the clap-derived [`Commands`] enum plus the match
//! below: built once from argv, immutable, and read-only afterwards.

use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::ui::UserInterface;

/// Everything a command gets for one invocation.
///
/// Created by the dispatcher per invocation, passed by mutable reference
/// into the selected command, and discarded when it returns.
pub struct ExecutionContext<'a> {
    /// Directory the command operates on.
    pub project_root: PathBuf,

    /// Process runner, wired to the process registry.
    pub runner: ProcessRunner,

    /// Output sink.
    pub ui: &'a mut dyn UserInterface,
}

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// `--version` short-circuits to the version report; no subcommand
    /// shows help and succeeds.
    pub fn dispatch(
        &self,
        cli: &Cli,
        runner: &ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut ctx = ExecutionContext {
            project_root: self.project_root.clone(),
            runner: runner.clone(),
            ui,
        };

        if cli.version {
            return super::version::VersionCommand::new().execute(&mut ctx);
        }

        match &cli.command {
            Some(Commands::Build(args)) => {
                super::build::BuildCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::Clean(args)) => {
                super::clean::CleanCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::Heroku(args)) => {
                super::heroku::HerokuCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::New(args)) => {
                super::new::NewCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::Run(args)) => {
                super::run::RunCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::Supervisor(args)) => {
                super::supervisor::SupervisorCommand::new(args.clone()).execute(&mut ctx)
            }
            Some(Commands::Xcode(args)) => {
                super::xcode::XcodeCommand::new(args.clone()).execute(&mut ctx)
            }
            None => {
                Cli::command().print_help()?;
                Ok(CommandResult::success())
            }
        }
    }
}
