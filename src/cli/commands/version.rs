//! Framework and toolbox version reporting.
//!
//! `capstan --version` prints two `key: value` lines: the Vapor version the
//! current project resolved in `Package.resolved`, and the toolbox version
//! Homebrew reports. The two lookups are independently fallible; either one
//! degrades to a `note:` warning plus `not found` without aborting the
//! other.

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::error::Result;

use super::dispatcher::{Command, CommandResult, ExecutionContext};

/// Package whose pinned version is reported as `framework:`.
const FRAMEWORK_PACKAGE: &str = "vapor";

/// Dependency lock file written by SwiftPM.
const LOCKFILE: &str = "Package.resolved";

/// Pinned-dependency schema of `Package.resolved`.
#[derive(Debug, Deserialize)]
struct PackageResolved {
    object: ResolvedObject,
}

#[derive(Debug, Deserialize)]
struct ResolvedObject {
    pins: Vec<Pin>,
}

#[derive(Debug, Deserialize)]
struct Pin {
    package: String,
    state: PinState,
}

#[derive(Debug, Deserialize)]
struct PinState {
    version: String,
}

impl PackageResolved {
    /// Pinned version of `package`, if the project depends on it.
    fn pinned_version(&self, package: &str) -> Option<&str> {
        self.object
            .pins
            .iter()
            .find(|pin| pin.package == package)
            .map(|pin| pin.state.version.as_str())
    }
}

/// The version report behind the top-level `--version` flag.
pub struct VersionCommand;

impl VersionCommand {
    /// Create a new version command.
    pub fn new() -> Self {
        Self
    }

    /// Resolve the framework version from the project's lock file.
    ///
    /// `Ok(None)` means the lock file parsed but carries no pin for the
    /// framework; an error means the file was missing or unparseable.
    fn framework_version(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>> {
        let lockfile = ctx.project_root.join(LOCKFILE);
        let raw = ctx.runner.capture("cat", [&lockfile])?;
        let resolved: PackageResolved = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", lockfile.display()))?;
        Ok(resolved
            .pinned_version(FRAMEWORK_PACKAGE)
            .map(str::to_string))
    }

    /// First line of the package manager's info output for the toolbox.
    fn toolbox_version(&self, ctx: &mut ExecutionContext<'_>) -> Result<String> {
        let info = ctx.runner.capture("brew", ["info", FRAMEWORK_PACKAGE])?;
        match info.lines().next() {
            Some(line) => Ok(line.to_string()),
            None => Err(anyhow!("empty info output").into()),
        }
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<CommandResult> {
        match self.framework_version(ctx) {
            Ok(Some(version)) => ctx.ui.output_kv("framework", &version),
            Ok(None) => {
                ctx.ui
                    .warning("this Swift project does not depend on Vapor.");
                ctx.ui.output_kv("framework", "not found");
            }
            Err(_) => {
                ctx.ui.warning("no Package.resolved file was found.");
                ctx.ui.output_kv("framework", "not found");
            }
        }

        match self.toolbox_version(ctx) {
            Ok(line) => ctx.ui.output_kv("toolbox", &line),
            Err(_) => {
                ctx.ui.warning("could not determine toolbox version.");
                ctx.ui.output_kv("toolbox", "not found");
            }
        }

        Ok(CommandResult::success())
    }
}
