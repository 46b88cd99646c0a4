//! New-project command implementation.
//!
//! `capstan new <name>` clones the template repository into a fresh
//! directory and detaches it from the template's git history.

use std::fs;

use crate::cli::args::NewArgs;
use crate::error::{CapstanError, Result};

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The new command implementation.
pub struct NewCommand {
    args: NewArgs,
}

impl NewCommand {
    /// Create a new-project command.
    pub fn new(args: NewArgs) -> Self {
        Self { args }
    }
}

impl Command for NewCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let target = ctx.project_root.join(&self.args.name);

        if target.exists() {
            let overwrite = ctx.ui.confirm(
                &format!("Directory '{}' already exists. Overwrite?", self.args.name),
                false,
            )?;
            if !overwrite {
                return Err(CapstanError::ProjectExists { path: target });
            }
            fs::remove_dir_all(&target)?;
        }

        ctx.ui
            .message(&format!("Cloning template from {}...", self.args.template));

        let target_str = target.display().to_string();
        ctx.runner.capture(
            "git",
            [
                "clone",
                "--depth",
                "1",
                self.args.template.as_str(),
                target_str.as_str(),
            ],
        )?;

        // Detach from the template's history; the project starts fresh.
        let git_dir = target.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)?;
        }

        ctx.ui
            .success(&format!("Project {} created.", self.args.name));
        ctx.ui.message(&format!(
            "Next: cd {} && capstan build",
            self.args.name
        ));
        Ok(CommandResult::success())
    }
}
