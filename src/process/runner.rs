//! External process execution.
//!
//! Three modes, differing in tracking and ownership:
//!
//! - **capture**: run to completion, return trimmed stdout. Synchronous and
//!   short-lived, so it never touches the registry.
//! - **foreground**: the child takes over the terminal. Its pid is published
//!   to the registry before this call blocks, and the slot is cleared
//!   unconditionally when it returns.
//! - **background**: the child outlives the call. The owned handle moves
//!   into the registry's supervised slot and stays there until explicitly
//!   cleared or replaced.

use std::ffi::OsStr;
use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::error::{CapstanError, Result};

use super::registry::{ProcessRegistry, Supervised};

/// Non-owning back-reference to a background child.
///
/// The registry owns the process; this is just enough to identify it.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundHandle {
    pid: u32,
}

impl BackgroundHandle {
    /// OS process id of the background child.
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// Executes external programs and keeps the registry in sync.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    registry: Arc<ProcessRegistry>,
}

impl ProcessRunner {
    /// Create a runner backed by the given registry.
    pub fn new(registry: Arc<ProcessRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this runner publishes to.
    pub fn registry(&self) -> &Arc<ProcessRegistry> {
        &self.registry
    }

    /// Run `program` to completion and return its stdout with trailing
    /// whitespace trimmed.
    ///
    /// Stderr is not mixed into the result; it is logged at debug level.
    /// A non-zero exit is an error carrying the exit code, without the
    /// partial stdout.
    pub fn capture<I, S>(&self, program: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::debug!("capturing output of '{}'", program);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CapstanError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.stderr.is_empty() {
            tracing::debug!(
                "'{}' stderr: {}",
                program,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        if !output.status.success() {
            return Err(CapstanError::CommandFailed {
                program: program.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }

    /// Run `program` with the terminal handed over to it and block until it
    /// exits. Returns the exit code; a non-zero code is not an error at
    /// this layer, callers decide what it means.
    ///
    /// The child's pid is published to the foreground slot before blocking,
    /// so an interrupt arriving at any point while the child runs finds it.
    /// The slot is cleared on every return path to avoid signaling a reaped
    /// pid.
    pub fn exec_foreground<I, S>(&self, program: &str, args: I) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::debug!("executing '{}' in foreground", program);

        let mut child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| CapstanError::Spawn {
                program: program.to_string(),
                source,
            })?;

        self.registry.set_foreground(child.id() as i32);
        let waited = child.wait();
        self.registry.clear_foreground();

        let status = waited?;
        Ok(status.code().unwrap_or(1))
    }

    /// Spawn `program` as a background child tracked in the supervised
    /// slot and return immediately.
    ///
    /// The runner never clears this slot on its own; the handle persists as
    /// the "last known long-lived process" until a caller clears it or a
    /// later spawn replaces it.
    pub fn spawn_background<I, S>(&self, program: &str, args: I) -> Result<BackgroundHandle>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::debug!("spawning '{}' in background", program);

        let child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| CapstanError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let handle = BackgroundHandle { pid: child.id() };
        self.registry.set_supervised(Supervised::new(child));
        Ok(handle)
    }
}
