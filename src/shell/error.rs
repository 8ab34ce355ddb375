//! Shell error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors a host can report back to the runtime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("event queue is closed")]
    QueueClosed,

    #[error("timer events can only be posted by the timer that fired")]
    TimerEventFromInput,

    #[error("timers are unavailable: {0}")]
    TimerUnavailable(String),
}

/// Errors that prevent a terminal session from starting.
///
/// These are fatal: the terminal is not mounted and nothing is retried.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("mount point '{selector}' does not exist")]
    MountPointMissing { selector: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
