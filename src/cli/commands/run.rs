//! Run command implementation.
//!
//! `capstan run` execs the app executable in the foreground. Vapor projects
//! name their entry-point executable `Run`, so this is `swift run Run`
//! plus whatever the user passed through.

use crate::cli::args::RunArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// Entry-point executable of a Vapor project.
const APP_EXECUTABLE: &str = "Run";

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }
}

impl Command for RunCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let mut swift_args = vec!["run".to_string(), APP_EXECUTABLE.to_string()];
        swift_args.extend(self.args.args.iter().cloned());

        let code = ctx.runner.exec_foreground("swift", swift_args)?;
        Ok(if code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(code)
        })
    }
}
