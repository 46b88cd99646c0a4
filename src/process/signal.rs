//! Interrupt relay.
//!
//! A single process-wide hook owns interrupt handling: when Ctrl-C arrives,
//! the relay reads both registry slots, forwards termination to whichever
//! children are tracked, and exits the dispatcher with the signal's numeric
//! code. The supervised child gets a soft SIGINT; the foreground child gets
//! the raw signal mirrored, so interactive tools see exactly what the
//! dispatcher saw.
//!
//! The hook is installed with the `ctrlc` crate, which runs the handler on a
//! dedicated thread rather than in a signal frame. The relay therefore runs
//! under ordinary scheduling and may take the registry's replace-sized lock
//! without deadlock risk.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;

use crate::error::Result;

use super::registry::ProcessRegistry;

#[cfg(unix)]
const INTERRUPT_CODE: i32 = libc::SIGINT;
#[cfg(not(unix))]
const INTERRUPT_CODE: i32 = 2;

/// Delivers a raw signal to a process by id.
///
/// Abstracted so relay behavior can be exercised in tests by counting
/// delivery attempts instead of signaling real processes.
pub(crate) trait SignalSender {
    fn deliver(&mut self, pid: i32, signal: i32);
}

/// Real delivery via `kill(2)`. Best-effort: a target that already exited
/// makes `kill` fail with ESRCH, which is deliberately ignored.
struct RawSender;

impl SignalSender for RawSender {
    #[cfg(unix)]
    fn deliver(&mut self, pid: i32, signal: i32) {
        unsafe {
            libc::kill(pid, signal);
        }
    }

    // Windows consoles deliver Ctrl-C to the whole process group, so the
    // children have already been signaled by the time the hook fires.
    #[cfg(not(unix))]
    fn deliver(&mut self, _pid: i32, _signal: i32) {}
}

/// Forward an interrupt with numeric code `code` to every tracked child.
///
/// Both slots are attempted, in either order; a null slot gets no delivery.
/// The supervised child receives a soft interrupt, the foreground child the
/// mirrored raw signal.
pub(crate) fn relay(registry: &ProcessRegistry, code: i32, sender: &mut dyn SignalSender) {
    if let Some(pid) = registry.supervised_pid() {
        sender.deliver(pid, INTERRUPT_CODE);
    }
    if let Some(pid) = registry.foreground_pid() {
        sender.deliver(pid, code);
    }
}

/// Installs the process-wide interrupt hook.
pub struct SignalRouter;

impl SignalRouter {
    /// Install the hook. Call once, before dispatching any command.
    ///
    /// The armed-to-terminating transition happens exactly once; a second
    /// interrupt while the first relay is unwinding is ignored.
    pub fn install(registry: Arc<ProcessRegistry>) -> Result<()> {
        let terminating = AtomicBool::new(false);

        ctrlc::set_handler(move || {
            if terminating.swap(true, Ordering::SeqCst) {
                return;
            }
            relay(&registry, INTERRUPT_CODE, &mut RawSender);
            process::exit(INTERRUPT_CODE);
        })
        .context("failed to install the interrupt handler")?;

        Ok(())
    }
}
