//! Process execution, tracking, and interrupt relay.
//!
//! This is the safety-critical core of Capstan. Subcommands spawn external
//! tools through [`ProcessRunner`]; every child that can outlive an instant
//! is tracked in the [`ProcessRegistry`]; and [`SignalRouter`] forwards a
//! top-level interrupt to whichever tracked child is currently active.
//!
//! Ordering guarantee: a registry slot is always populated before the
//! runner blocks on its child, so an interrupt arriving mid-call cannot be
//! silently dropped.

pub mod registry;
pub mod runner;
pub mod signal;

pub use registry::{ProcessRegistry, Supervised};
pub use runner::{BackgroundHandle, ProcessRunner};
pub use signal::SignalRouter;
