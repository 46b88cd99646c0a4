//! Build command implementation.
//!
//! `capstan build` hands the terminal to `swift build` and propagates its
//! exit code.

use crate::cli::args::BuildArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The build command implementation.
pub struct BuildCommand {
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(args: BuildArgs) -> Self {
        Self { args }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let mut swift_args = vec!["build".to_string()];
        swift_args.extend(self.args.args.iter().cloned());

        let code = ctx.runner.exec_foreground("swift", swift_args)?;
        Ok(if code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(code)
        })
    }
}
