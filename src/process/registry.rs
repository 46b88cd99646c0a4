//! Process tracking registry.
//!
//! The registry is the single piece of shared mutable state in Capstan: one
//! slot for the current background/supervised child (an owned handle) and
//! one slot for the current foreground exec (a bare pid). The interrupt
//! relay reads both slots from the handler thread, so each slot supports a
//! single-replace update and nothing more.
//!
//! Slot lifecycle invariant: a slot is non-empty only between the moment its
//! process is spawned and the moment it exits, is reaped, or is explicitly
//! reset. The runner is the only writer on spawn; completion or an explicit
//! reset is the only clear.

use std::io;
use std::process::{Child, ExitStatus};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

/// Sentinel for an empty foreground slot. Pid 0 is never a spawned child.
const NO_PID: i32 = 0;

/// An owned handle to a background/supervised child process.
///
/// The registry's supervised slot is the sole owner of the OS process
/// resource; callers keep at most a bare pid to observe it.
#[derive(Debug)]
pub struct Supervised {
    child: Child,
}

impl Supervised {
    pub(crate) fn new(child: Child) -> Self {
        Self { child }
    }

    /// OS process id of the supervised child.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Ask the child to stop with SIGINT. Best-effort: delivery failure
    /// (already exited) is ignored.
    #[cfg(unix)]
    pub fn interrupt(&mut self) {
        unsafe {
            libc::kill(self.child.id() as i32, libc::SIGINT);
        }
    }

    /// On platforms without raw signals the closest thing to an interrupt
    /// is a hard kill.
    #[cfg(not(unix))]
    pub fn interrupt(&mut self) {
        self.child.kill().ok();
    }

    /// Kill the child outright. Best-effort.
    pub fn terminate(&mut self) {
        self.child.kill().ok();
    }

    /// Check for completion without blocking.
    pub fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        self.child.try_wait()
    }

    /// Block until the child exits.
    pub fn wait(&mut self) -> io::Result<ExitStatus> {
        self.child.wait()
    }
}

/// Process-wide registry of tracked child processes.
///
/// Lifecycle matches the process: initialized empty at startup, torn down
/// implicitly at exit. The foreground slot is a bare atomic so it can be
/// read and written without any lock; the supervised slot holds an owned
/// handle behind a mutex whose critical sections are replace-sized: it is
/// never held across a blocking call, and the relay runs on the interrupt
/// hook's dedicated thread, not inside a signal frame.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    supervised: Mutex<Option<Supervised>>,
    foreground: AtomicI32,
}

impl ProcessRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            supervised: Mutex::new(None),
            foreground: AtomicI32::new(NO_PID),
        }
    }

    /// Lock the supervised slot. The relay must keep working even if some
    /// other thread panicked while holding the lock, so poisoning is
    /// recovered rather than propagated.
    fn supervised_slot(&self) -> std::sync::MutexGuard<'_, Option<Supervised>> {
        self.supervised
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Publish a supervised child, replacing (and dropping) any previous
    /// handle. The replaced process is not signaled; it simply stops being
    /// the relay target.
    pub fn set_supervised(&self, child: Supervised) {
        *self.supervised_slot() = Some(child);
    }

    /// Take the supervised handle out of the registry, leaving the slot
    /// empty. The caller decides what to do with the process.
    pub fn clear_supervised(&self) -> Option<Supervised> {
        self.supervised_slot().take()
    }

    /// Pid of the supervised child, if one is tracked.
    pub fn supervised_pid(&self) -> Option<i32> {
        self.supervised_slot().as_ref().map(|s| s.id() as i32)
    }

    /// Non-blocking completion check on the supervised child.
    ///
    /// Returns `None` when the slot is empty. A finished child stays in the
    /// slot; the slot persists until explicitly cleared or replaced.
    pub fn try_wait_supervised(&self) -> Option<io::Result<Option<ExitStatus>>> {
        self.supervised_slot().as_mut().map(|s| s.try_wait())
    }

    /// Hard-kill the supervised child if one is tracked. Best-effort.
    pub fn terminate_supervised(&self) {
        if let Some(s) = self.supervised_slot().as_mut() {
            s.terminate();
        }
    }

    /// Publish the pid of a foreground exec.
    pub fn set_foreground(&self, pid: i32) {
        self.foreground.store(pid, Ordering::SeqCst);
    }

    /// Empty the foreground slot.
    pub fn clear_foreground(&self) {
        self.foreground.store(NO_PID, Ordering::SeqCst);
    }

    /// Pid of the current foreground exec, if one is outstanding.
    pub fn foreground_pid(&self) -> Option<i32> {
        match self.foreground.load(Ordering::SeqCst) {
            NO_PID => None,
            pid => Some(pid),
        }
    }
}
