//! Capstan CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use capstan::cli::{deprecated, Cli, CommandDispatcher};
use capstan::process::{ProcessRegistry, ProcessRunner, SignalRouter};
use capstan::ui::create_ui;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("capstan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("capstan=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // A removed command name gets a fixed migration message instead
            // of clap's unrecognized-subcommand error.
            if let Some(name) = deprecated::deprecated_command(&err) {
                println!("{}", deprecated::notice(&name));
                return ExitCode::SUCCESS;
            }
            err.exit()
        }
    };

    init_tracing(cli.debug);
    tracing::debug!("Capstan starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = std::env::current_dir().unwrap_or_default();

    let registry = Arc::new(ProcessRegistry::new());
    let runner = ProcessRunner::new(Arc::clone(&registry));
    let mut ui = create_ui();

    // The interrupt hook must be live before any child can be spawned.
    if let Err(e) = SignalRouter::install(registry) {
        ui.error(&format!("Error: {}", e));
        return ExitCode::from(1);
    }

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &runner, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
