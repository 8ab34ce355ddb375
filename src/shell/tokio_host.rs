//! A host backed by tokio timers.
//!
//! There is no DOM here: focus and scroll requests are only logged, and
//! drawing is delegated to a callback supplied by the caller.

use super::error::HostError;
use super::host::{Host, TimerHandle};
use super::queue::{EventSender, WeakEventSender};
use crate::update::Event;
use crate::view::View;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::{debug, trace};

type RenderFn = Arc<dyn Fn(&View) + Send + Sync>;
type Timers = Arc<Mutex<HashMap<TimerHandle, AbortHandle>>>;

#[derive(Clone)]
pub struct TokioHost {
    sender: WeakEventSender,
    mount_points: Arc<HashSet<String>>,
    timers: Timers,
    on_render: Option<RenderFn>,
}

impl fmt::Debug for TokioHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioHost")
            .field("mount_points", &self.mount_points)
            .field("pending_timers", &self.pending_timers())
            .field("on_render", &self.on_render.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl TokioHost {
    /// Timers post through a weak handle to `sender`, so a pending timer
    /// never keeps the session alive on its own.
    pub fn new(sender: &EventSender) -> Self {
        Self {
            sender: sender.downgrade(),
            mount_points: Arc::new(HashSet::new()),
            timers: Arc::new(Mutex::new(HashMap::new())),
            on_render: None,
        }
    }

    pub fn with_mount_point(mut self, selector: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.mount_points).insert(selector.into());
        self
    }

    pub fn on_render(mut self, render: impl Fn(&View) + Send + Sync + 'static) -> Self {
        self.on_render = Some(Arc::new(render));
        self
    }

    pub fn pending_timers(&self) -> usize {
        lock(&self.timers).len()
    }
}

impl Host for TokioHost {
    fn has_mount_point(&self, selector: &str) -> bool {
        self.mount_points.contains(selector)
    }

    fn schedule_after(&self, delay: Duration, event: Event) -> Result<TimerHandle, HostError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|err| HostError::TimerUnavailable(err.to_string()))?;
        let handle = TimerHandle::new();
        let sender = self.sender.clone();
        let timers = Arc::clone(&self.timers);

        // Held across spawn so the task cannot forget itself before it is
        // registered.
        let mut registered = lock(&self.timers);
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&timers).remove(&handle);
            match sender.upgrade() {
                Some(sender) => {
                    if sender.post_timer(handle, event).is_err() {
                        debug!(%handle, "timer fired after the session ended");
                    }
                }
                None => debug!(%handle, "timer fired after the session ended"),
            }
        });
        registered.insert(handle, task.abort_handle());
        Ok(handle)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = lock(&self.timers).remove(&handle) {
            task.abort();
        }
    }

    fn focus_without_scrolling(&self, element_id: &str) {
        trace!(element_id, "focus without scrolling");
    }

    fn scroll_into_view(&self, element_id: &str) {
        trace!(element_id, "scroll into view");
    }

    fn render(&self, view: &View) {
        if let Some(render) = &self.on_render {
            render(view);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
