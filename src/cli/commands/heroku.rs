//! Heroku deployment command.
//!
//! `capstan heroku` pushes the project to a Heroku git remote. The remote
//! must already be configured; the push itself runs in the foreground so
//! the user sees the build log stream.

use crate::cli::args::HerokuArgs;
use crate::error::{CapstanError, Result};

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The heroku command implementation.
pub struct HerokuCommand {
    args: HerokuArgs,
}

impl HerokuCommand {
    /// Create a new heroku command.
    pub fn new(args: HerokuArgs) -> Self {
        Self { args }
    }
}

impl Command for HerokuCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let root = ctx.project_root.display().to_string();

        match ctx.runner.capture(
            "git",
            [
                "-C",
                root.as_str(),
                "remote",
                "get-url",
                self.args.remote.as_str(),
            ],
        ) {
            Ok(_) => {}
            Err(CapstanError::CommandFailed { .. }) => {
                return Err(CapstanError::MissingRemote {
                    remote: self.args.remote.clone(),
                });
            }
            Err(err) => return Err(err),
        }

        ctx.ui.message(&format!(
            "Pushing {} to {}...",
            self.args.branch, self.args.remote
        ));

        let code = ctx.runner.exec_foreground(
            "git",
            [
                "-C",
                root.as_str(),
                "push",
                self.args.remote.as_str(),
                self.args.branch.as_str(),
            ],
        )?;
        if code == 0 {
            ctx.ui.success("Deployed to Heroku.");
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessRegistry, ProcessRunner};
    use crate::ui::MockUI;
    use std::process::Command as StdCommand;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn git(temp: &TempDir, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(temp.path())
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {args:?} failed");
    }

    #[cfg(unix)]
    #[test]
    fn missing_remote_is_reported() {
        let temp = TempDir::new().unwrap();
        git(&temp, &["init", "-q"]);

        let runner = ProcessRunner::new(Arc::new(ProcessRegistry::new()));
        let mut ui = MockUI::new();
        let mut ctx = ExecutionContext {
            project_root: temp.path().to_path_buf(),
            runner,
            ui: &mut ui,
        };

        let err = HerokuCommand::new(HerokuArgs {
            remote: "heroku".into(),
            branch: "main".into(),
        })
        .execute(&mut ctx)
        .unwrap_err();

        assert!(matches!(err, CapstanError::MissingRemote { .. }));
        assert!(ui.messages().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn outside_a_repository_is_reported_as_missing_remote() {
        let temp = TempDir::new().unwrap();

        let runner = ProcessRunner::new(Arc::new(ProcessRegistry::new()));
        let mut ui = MockUI::new();
        let mut ctx = ExecutionContext {
            project_root: temp.path().to_path_buf(),
            runner,
            ui: &mut ui,
        };

        let err = HerokuCommand::new(HerokuArgs {
            remote: "heroku".into(),
            branch: "main".into(),
        })
        .execute(&mut ctx)
        .unwrap_err();

        assert!(matches!(err, CapstanError::MissingRemote { .. }));
    }
}
