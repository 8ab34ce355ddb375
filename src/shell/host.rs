//! The hosting environment contract.

use super::error::HostError;
use crate::update::Event;
use crate::view::View;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identifies one armed one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(Uuid);

impl TimerHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Capabilities the runtime needs from the page it lives in.
///
/// DOM actions are best effort: a missing element is ignored by the host
/// and never reported back. Timers post their event through the session's
/// event queue when they fire; they never touch the session directly.
pub trait Host: Clone + Send + Sync + 'static {
    /// Whether the element the terminal mounts into exists.
    fn has_mount_point(&self, selector: &str) -> bool;

    /// Arm a one-shot timer that posts `event` after `delay`.
    fn schedule_after(&self, delay: Duration, event: Event) -> Result<TimerHandle, HostError>;

    /// Disarm a timer. Has no effect if it already fired.
    fn cancel(&self, handle: TimerHandle);

    fn focus_without_scrolling(&self, element_id: &str);

    fn scroll_into_view(&self, element_id: &str);

    /// Draw the latest view.
    fn render(&self, view: &View);
}
