//! Clean command implementation.
//!
//! `capstan clean` removes `.build`; `--update` also removes
//! `Package.resolved` so the next build re-resolves dependencies.

use std::fs;

use crate::cli::args::CleanArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The clean command implementation.
pub struct CleanCommand {
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(args: CleanArgs) -> Self {
        Self { args }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let mut cleaned = false;

        let build_dir = ctx.project_root.join(".build");
        if build_dir.exists() {
            fs::remove_dir_all(&build_dir)?;
            ctx.ui.message("Removed .build");
            cleaned = true;
        }

        if self.args.update {
            let resolved = ctx.project_root.join("Package.resolved");
            if resolved.exists() {
                fs::remove_file(&resolved)?;
                ctx.ui.message("Removed Package.resolved");
                cleaned = true;
            }
        }

        if cleaned {
            ctx.ui.success("Project cleaned.");
        } else {
            ctx.ui.message("Nothing to clean.");
        }
        Ok(CommandResult::success())
    }
}
