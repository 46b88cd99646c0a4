//! Supervisor command implementation.
//!
//! Provides `capstan supervisor init` and `capstan supervisor restart` for
//! projects deployed under supervisord. `init` writes a program entry for
//! the app and asks supervisord to pick it up; the reload is best-effort
//! since the entry is still useful to copy into place by hand.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::{SupervisorArgs, SupervisorSubcommand};
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// The supervisor command implementation.
pub struct SupervisorCommand {
    args: SupervisorArgs,
}

impl SupervisorCommand {
    /// Create a new supervisor command.
    pub fn new(args: SupervisorArgs) -> Self {
        Self { args }
    }
}

/// Program name supervisord knows the app by: the project directory name.
fn app_name(ctx: &ExecutionContext<'_>) -> String {
    ctx.project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}

/// Render the supervisord program entry for the app.
fn render_entry(app: &str, root: &std::path::Path) -> String {
    format!(
        "[program:{app}]\n\
         command={root}/.build/release/Run serve --env production\n\
         directory={root}\n\
         autostart=true\n\
         autorestart=true\n\
         stdout_logfile=/var/log/supervisor/{app}.out.log\n\
         stderr_logfile=/var/log/supervisor/{app}.err.log\n",
        app = app,
        root = root.display(),
    )
}

impl Command for SupervisorCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        let app = app_name(ctx);

        match &self.args.command {
            SupervisorSubcommand::Init { output } => {
                let path: PathBuf = output
                    .clone()
                    .unwrap_or_else(|| ctx.project_root.join(format!("{app}.conf")));

                fs::write(&path, render_entry(&app, &ctx.project_root))?;
                ctx.ui
                    .message(&format!("Wrote program entry to {}", path.display()));

                let reloaded = ctx.runner.capture("supervisorctl", ["reread"]).is_ok()
                    && ctx.runner.capture("supervisorctl", ["update"]).is_ok();
                if reloaded {
                    ctx.ui.success(&format!("supervisord now manages {app}."));
                } else {
                    ctx.ui.warning(
                        "could not reload supervisord; install the entry and reload manually.",
                    );
                }
                Ok(CommandResult::success())
            }
            SupervisorSubcommand::Restart => {
                let out = ctx
                    .runner
                    .capture("supervisorctl", ["restart", app.as_str()])?;
                if !out.is_empty() {
                    ctx.ui.message(&out);
                }
                ctx.ui.success(&format!("Restarted {app}."));
                Ok(CommandResult::success())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessRegistry, ProcessRunner};
    use crate::ui::MockUI;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn render_entry_names_the_program() {
        let entry = render_entry("hello", std::path::Path::new("/srv/hello"));
        assert!(entry.starts_with("[program:hello]\n"));
        assert!(entry.contains("command=/srv/hello/.build/release/Run serve"));
        assert!(entry.contains("directory=/srv/hello"));
    }

    #[test]
    fn init_writes_program_entry() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessRunner::new(Arc::new(ProcessRegistry::new()));
        let mut ui = MockUI::new();
        let mut ctx = ExecutionContext {
            project_root: temp.path().to_path_buf(),
            runner,
            ui: &mut ui,
        };
        let app = app_name(&ctx);

        let result = SupervisorCommand::new(SupervisorArgs {
            command: SupervisorSubcommand::Init { output: None },
        })
        .execute(&mut ctx)
        .unwrap();

        assert!(result.success);
        let written = fs::read_to_string(temp.path().join(format!("{app}.conf"))).unwrap();
        assert!(written.contains(&format!("[program:{app}]")));
    }

    #[test]
    fn init_reload_failure_is_soft() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessRunner::new(Arc::new(ProcessRegistry::new()));
        let mut ui = MockUI::new();
        let mut ctx = ExecutionContext {
            project_root: temp.path().to_path_buf(),
            runner,
            ui: &mut ui,
        };

        // Without a running supervisord the reload cannot succeed, but the
        // command itself still does.
        let result = SupervisorCommand::new(SupervisorArgs {
            command: SupervisorSubcommand::Init { output: None },
        })
        .execute(&mut ctx)
        .unwrap();

        assert!(result.success);
    }

    #[test]
    fn init_honors_output_override() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("conf.d").join("app.conf");
        fs::create_dir_all(target.parent().unwrap()).unwrap();

        let runner = ProcessRunner::new(Arc::new(ProcessRegistry::new()));
        let mut ui = MockUI::new();
        let mut ctx = ExecutionContext {
            project_root: temp.path().to_path_buf(),
            runner,
            ui: &mut ui,
        };

        SupervisorCommand::new(SupervisorArgs {
            command: SupervisorSubcommand::Init {
                output: Some(target.clone()),
            },
        })
        .execute(&mut ctx)
        .unwrap();

        assert!(target.exists());
    }
}
