//! A host that records every call, for tests.
//!
//! Timers never fire on their own: tests fire them explicitly with
//! [`RecordingHost::fire`], which posts the timer's event into the queue
//! exactly as a real timer callback would.

use super::error::HostError;
use super::host::{Host, TimerHandle};
use super::queue::{EventSender, WeakEventSender};
use crate::update::Event;
use crate::view::View;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One call the runtime made into the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Schedule {
        handle: TimerHandle,
        delay: Duration,
        event: Event,
    },
    Cancel(TimerHandle),
    Focus(String),
    Scroll(String),
    Render(View),
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<HostCall>,
    pending: Vec<(TimerHandle, Event)>,
}

#[derive(Clone, Debug)]
pub struct RecordingHost {
    sender: WeakEventSender,
    mount_points: Arc<HashSet<String>>,
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingHost {
    /// A host with no mount points, posting timer events through `sender`.
    ///
    /// Like [`super::TokioHost`], the host only keeps a weak handle, so
    /// [`super::Runtime::run`] ends once the caller drops its senders.
    pub fn new(sender: &EventSender) -> Self {
        Self {
            sender: sender.downgrade(),
            mount_points: Arc::new(HashSet::new()),
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    pub fn with_mount_point(mut self, selector: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.mount_points).insert(selector.into());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    /// The most recently rendered view.
    pub fn last_view(&self) -> Option<View> {
        self.lock().calls.iter().rev().find_map(|call| match call {
            HostCall::Render(view) => Some(view.clone()),
            _ => None,
        })
    }

    /// Timers that are armed and have neither fired nor been cancelled.
    pub fn pending_timers(&self) -> Vec<TimerHandle> {
        self.lock().pending.iter().map(|(handle, _)| *handle).collect()
    }

    /// Fire a pending timer. Returns `false` if it was not pending.
    pub fn fire(&self, handle: TimerHandle) -> Result<bool, HostError> {
        let fired = {
            let mut recorded = self.lock();
            let position = recorded.pending.iter().position(|(h, _)| *h == handle);
            position.map(|index| recorded.pending.remove(index))
        };
        match fired {
            Some((handle, event)) => self.upgrade()?.post_timer(handle, event).map(|()| true),
            None => Ok(false),
        }
    }

    /// Fire every pending timer in the order they were armed.
    pub fn fire_all(&self) -> Result<usize, HostError> {
        let pending = std::mem::take(&mut self.lock().pending);
        let count = pending.len();
        let sender = self.upgrade()?;
        for (handle, event) in pending {
            sender.post_timer(handle, event)?;
        }
        Ok(count)
    }

    fn upgrade(&self) -> Result<EventSender, HostError> {
        self.sender.upgrade().ok_or(HostError::QueueClosed)
    }

    fn record(&self, call: HostCall) {
        self.lock().calls.push(call);
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Host for RecordingHost {
    fn has_mount_point(&self, selector: &str) -> bool {
        self.mount_points.contains(selector)
    }

    fn schedule_after(&self, delay: Duration, event: Event) -> Result<TimerHandle, HostError> {
        let handle = TimerHandle::new();
        let mut recorded = self.lock();
        recorded.pending.push((handle, event.clone()));
        recorded.calls.push(HostCall::Schedule {
            handle,
            delay,
            event,
        });
        Ok(handle)
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut recorded = self.lock();
        recorded.pending.retain(|(h, _)| *h != handle);
        recorded.calls.push(HostCall::Cancel(handle));
    }

    fn focus_without_scrolling(&self, element_id: &str) {
        self.record(HostCall::Focus(element_id.to_string()));
    }

    fn scroll_into_view(&self, element_id: &str) {
        self.record(HostCall::Scroll(element_id.to_string()));
    }

    fn render(&self, view: &View) {
        self.record(HostCall::Render(view.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::queue::event_queue;

    #[test]
    fn cancelled_timers_cannot_fire() {
        let (sender, mut queue) = event_queue();
        let host = RecordingHost::new(&sender);
        let handle = host
            .schedule_after(Duration::from_millis(5), Event::TimerTick(2))
            .unwrap();
        host.cancel(handle);

        assert!(!host.fire(handle).unwrap());
        assert!(queue.try_recv().is_none());
        assert_eq!(host.calls().last(), Some(&HostCall::Cancel(handle)));
    }

    #[test]
    fn fire_all_posts_in_arming_order() {
        let (sender, mut queue) = event_queue();
        let host = RecordingHost::new(&sender);
        host.schedule_after(Duration::ZERO, Event::TimerTick(1)).unwrap();
        host.schedule_after(Duration::ZERO, Event::TimerTick(2)).unwrap();

        assert_eq!(host.fire_all().unwrap(), 2);
        assert_eq!(queue.try_recv().map(|e| e.event), Some(Event::TimerTick(1)));
        assert_eq!(queue.try_recv().map(|e| e.event), Some(Event::TimerTick(2)));
        assert!(host.pending_timers().is_empty());
    }

    #[test]
    fn firing_after_senders_are_gone_reports_closed_queue() {
        let (sender, _queue) = event_queue();
        let host = RecordingHost::new(&sender);
        let handle = host.schedule_after(Duration::ZERO, Event::TimerTick(2)).unwrap();
        drop(sender);

        assert_eq!(host.fire(handle), Err(HostError::QueueClosed));
    }

    #[test]
    fn mount_points_are_exact() {
        let (sender, _queue) = event_queue();
        let host = RecordingHost::new(&sender).with_mount_point("#terminal");
        assert!(host.has_mount_point("#terminal"));
        assert!(!host.has_mount_point("terminal"));
    }
}
