//! Xcode project command.
//!
//! `capstan xcode` generates the Xcode project for the package and opens
//! it. The `open` process is spawned in background/supervised mode: it
//! outlives the command, and an interrupt arriving before the dispatcher
//! exits is still relayed to it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::cli::args::XcodeArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The xcode command implementation.
pub struct XcodeCommand {
    args: XcodeArgs,
}

impl XcodeCommand {
    /// Create a new xcode command.
    pub fn new(args: XcodeArgs) -> Self {
        Self { args }
    }
}

/// Locate the generated `.xcodeproj` bundle in the project root.
fn find_xcodeproj(root: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "xcodeproj") {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

impl Command for XcodeCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        ctx.ui.message("Generating Xcode project...");
        ctx.runner
            .capture("swift", ["package", "generate-xcodeproj"])?;

        let project = find_xcodeproj(&ctx.project_root)?
            .ok_or_else(|| anyhow!("no .xcodeproj was generated"))?;

        if self.args.no_open {
            ctx.ui
                .success(&format!("Generated {}.", project.display()));
            return Ok(CommandResult::success());
        }

        let handle = ctx
            .runner
            .spawn_background("open", [project.as_os_str()])?;
        tracing::debug!("opened {} (pid {})", project.display(), handle.pid());

        ctx.ui.success(&format!("Opening {}...", project.display()));
        Ok(CommandResult::success())
    }
}
