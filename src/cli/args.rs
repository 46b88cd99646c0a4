//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! clap's built-in version flag is disabled: `--version` reports the
//! project's resolved framework version and the installed toolbox version,
//! not this crate's version.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Capstan - toolbelt for server-side Swift (Vapor) projects.
#[derive(Debug, Parser)]
#[command(name = "capstan")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print framework and toolbox versions
    #[arg(long)]
    pub version: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile the project with swift build
    Build(BuildArgs),

    /// Remove build artifacts
    Clean(CleanArgs),

    /// Push the project to a Heroku git remote
    Heroku(HerokuArgs),

    /// Create a new project from the template repository
    New(NewArgs),

    /// Build and run the app executable
    Run(RunArgs),

    /// Manage the supervisord entry for the app
    Supervisor(SupervisorArgs),

    /// Generate the Xcode project and open it
    Xcode(XcodeArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Extra arguments passed through to swift build
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Also remove Package.resolved so dependencies re-resolve
    #[arg(short, long)]
    pub update: bool,
}

/// Arguments for the `heroku` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HerokuArgs {
    /// Git remote to push to
    #[arg(long, default_value = "heroku")]
    pub remote: String,

    /// Branch to push
    #[arg(long, default_value = "main")]
    pub branch: String,
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NewArgs {
    /// Name of the project directory to create
    pub name: String,

    /// Template repository to clone
    #[arg(long, default_value = "https://github.com/vapor/template")]
    pub template: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Extra arguments passed through to the app executable
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `supervisor` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SupervisorArgs {
    #[command(subcommand)]
    pub command: SupervisorSubcommand,
}

/// Supervisor subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SupervisorSubcommand {
    /// Write a supervisord program entry and reload supervisord
    Init {
        /// Where to write the program entry
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restart the app's supervisord program entry
    Restart,
}

/// Arguments for the `xcode` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct XcodeArgs {
    /// Generate the project without opening it
    #[arg(long)]
    pub no_open: bool,
}
