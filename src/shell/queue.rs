//! The session's single ordered event queue.
//!
//! Every queued event remembers where it came from, so the runtime can drop
//! ticks from timers that were cancelled after they had already fired.

use super::error::HostError;
use super::host::TimerHandle;
use crate::update::{Event, ENTER};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Origin {
    Input,
    Timer(TimerHandle),
}

#[derive(Debug)]
pub(crate) struct Envelope {
    pub(crate) origin: Origin,
    pub(crate) event: Event,
}

/// Create a connected sender/queue pair.
pub fn event_queue() -> (EventSender, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventQueue { rx })
}

/// Posts events into a session's queue.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: UnboundedSender<Envelope>,
}

impl EventSender {
    /// Forward user input.
    ///
    /// `TimerTick` is refused here; timers post through [`Self::post_timer`]
    /// so the runtime can tell a live tick from a superseded one.
    pub fn send(&self, event: Event) -> Result<(), HostError> {
        if matches!(event, Event::TimerTick(_)) {
            return Err(HostError::TimerEventFromInput);
        }
        self.post(Origin::Input, event)
    }

    /// Report that the prompt field now holds `text`.
    pub fn input(&self, text: impl Into<String>) -> Result<(), HostError> {
        self.send(Event::InputChanged(text.into()))
    }

    pub fn key(&self, key: impl Into<String>) -> Result<(), HostError> {
        self.send(Event::KeyPressed(key.into()))
    }

    /// Type a whole line and press Enter.
    pub fn submit_line(&self, text: impl Into<String>) -> Result<(), HostError> {
        self.input(text)?;
        self.key(ENTER)
    }

    /// Post the event of a timer that just fired.
    pub fn post_timer(&self, handle: TimerHandle, event: Event) -> Result<(), HostError> {
        self.post(Origin::Timer(handle), event)
    }

    /// A sender that does not keep the queue open.
    pub fn downgrade(&self) -> WeakEventSender {
        WeakEventSender {
            tx: self.tx.downgrade(),
        }
    }

    fn post(&self, origin: Origin, event: Event) -> Result<(), HostError> {
        self.tx
            .send(Envelope { origin, event })
            .map_err(|_| HostError::QueueClosed)
    }
}

/// A sender that lets the queue close once every [`EventSender`] is gone.
#[derive(Clone, Debug)]
pub struct WeakEventSender {
    tx: WeakUnboundedSender<Envelope>,
}

impl WeakEventSender {
    pub fn upgrade(&self) -> Option<EventSender> {
        self.tx.upgrade().map(|tx| EventSender { tx })
    }
}

/// Receiving end, owned by the runtime.
#[derive(Debug)]
pub struct EventQueue {
    rx: UnboundedReceiver<Envelope>,
}

impl EventQueue {
    pub(crate) async fn recv(&mut self) -> Option<Envelope> {
        self.rx.recv().await
    }

    pub(crate) fn try_recv(&mut self) -> Option<Envelope> {
        self.rx.try_recv().ok()
    }
}
