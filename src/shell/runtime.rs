//! Runtime that owns a session and executes its effects.
//!
//! The runtime is the imperative shell around [`update`]: it pulls events
//! from the queue one at a time, replaces the session, and runs every
//! returned effect against the host before admitting the next event.

use super::error::{HostError, StartError};
use super::host::{Host, TimerHandle};
use super::queue::{Envelope, EventQueue, Origin};
use crate::config::TerminalConfig;
use crate::core::Session;
use crate::update::{update, Effect as Instruction, Event, RandomTiming, TimerKind, TimingSource};
use crate::view::{view, View};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use stillwater::effect::{BoxedEffect, Effect as _};
use stillwater::prelude::*;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Clone, Copy, Debug)]
struct ArmedTimer {
    handle: TimerHandle,
    armed_at: DateTime<Utc>,
}

/// What running one instruction against the host produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Applied {
    Done,
    Armed(TimerKind, TimerHandle),
}

/// A live terminal session bound to a host.
pub struct Runtime<H: Host> {
    id: Uuid,
    config: TerminalConfig,
    host: H,
    queue: EventQueue,
    timing: Box<dyn TimingSource>,
    session: Session,
    timers: HashMap<TimerKind, ArmedTimer>,
}

impl<H: Host> Runtime<H> {
    /// Validate the environment and start a session.
    ///
    /// Elapsed values are drawn at random from `config.timing`. The mount
    /// point is checked exactly once. If it is missing the session is never
    /// created.
    pub fn start(config: TerminalConfig, host: H, queue: EventQueue) -> Result<Self, StartError> {
        let timing = RandomTiming::new(config.timing.range());
        Self::start_with_timing(config, host, queue, timing)
    }

    /// Like [`Runtime::start`], drawing elapsed values from `timing` instead.
    pub fn start_with_timing(
        config: TerminalConfig,
        host: H,
        queue: EventQueue,
        mut timing: impl TimingSource + 'static,
    ) -> Result<Self, StartError> {
        let config = config.validated()?;
        if !host.has_mount_point(&config.mount_selector) {
            error!(
                selector = %config.mount_selector,
                "mount point missing, terminal not started"
            );
            return Err(StartError::MountPointMissing {
                selector: config.mount_selector,
            });
        }

        let session = Session::new(timing.next_elapsed());
        let runtime = Self {
            id: Uuid::new_v4(),
            config,
            host,
            queue,
            timing: Box::new(timing),
            session,
            timers: HashMap::new(),
        };
        info!(
            session = %runtime.id,
            elapsed = runtime.session.elapsed(),
            "terminal session started"
        );
        runtime.host.render(&runtime.view());
        Ok(runtime)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        view(&self.session)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle of the timer of this kind that is still in flight, if any.
    pub fn armed_timer(&self, kind: TimerKind) -> Option<TimerHandle> {
        self.timers.get(&kind).map(|armed| armed.handle)
    }

    /// Process one event to completion, then render.
    ///
    /// Host failures are logged and do not roll the session back.
    pub async fn dispatch(&mut self, event: Event) {
        let (next, instructions) = update(&self.config, &self.session, event);
        self.session = next;
        for instruction in instructions {
            if let Err(err) = self.apply(instruction).await {
                warn!(session = %self.id, %err, "host could not carry out effect");
            }
        }
        self.host.render(&self.view());
    }

    /// Process everything currently queued. Returns the number of events
    /// taken from the queue, including dropped stale ticks.
    pub async fn drain(&mut self) -> usize {
        let mut taken = 0;
        while let Some(envelope) = self.queue.try_recv() {
            self.deliver(envelope).await;
            taken += 1;
        }
        taken
    }

    /// Process events until every sender has gone away, then hand back the
    /// final session.
    pub async fn run(mut self) -> Session {
        while let Some(envelope) = self.queue.recv().await {
            self.deliver(envelope).await;
        }
        for armed in self.timers.values() {
            self.host.cancel(armed.handle);
        }
        info!(
            session = %self.id,
            commands = self.session.transcript().len(),
            "event queue closed, terminal session ended"
        );
        self.session
    }

    async fn deliver(&mut self, envelope: Envelope) {
        if let Origin::Timer(handle) = envelope.origin {
            let kind = self
                .timers
                .iter()
                .find(|(_, armed)| armed.handle == handle)
                .map(|(kind, _)| *kind);
            let Some(armed) = kind.and_then(|kind| self.timers.remove(&kind)) else {
                debug!(%handle, "dropping event from superseded timer");
                return;
            };
            debug!(
                %handle,
                waited_ms = (Utc::now() - armed.armed_at).num_milliseconds(),
                "timer fired"
            );
        }
        self.dispatch(envelope.event).await;
    }

    async fn apply(&mut self, instruction: Instruction) -> Result<(), HostError> {
        debug!(?instruction, "executing effect");
        match self.plan(instruction).run(&self.host).await? {
            Applied::Done => {}
            Applied::Armed(kind, handle) => {
                self.timers.insert(
                    kind,
                    ArmedTimer {
                        handle,
                        armed_at: Utc::now(),
                    },
                );
            }
        }
        Ok(())
    }

    /// Turn an instruction into an effect over the host.
    ///
    /// Timer bookkeeping happens here, before the effect runs: a cancel
    /// forgets the tracked handle, an arm draws the next elapsed value.
    fn plan(&mut self, instruction: Instruction) -> BoxedEffect<Applied, HostError, H> {
        match instruction {
            Instruction::FocusWithoutScroll(id) => from_fn(move |host: &H| {
                host.focus_without_scrolling(&id);
                Ok::<_, HostError>(Applied::Done)
            })
            .boxed(),
            Instruction::ScrollIntoView(id) => from_fn(move |host: &H| {
                host.scroll_into_view(&id);
                Ok::<_, HostError>(Applied::Done)
            })
            .boxed(),
            Instruction::CancelTimer(kind) => match self.timers.remove(&kind) {
                Some(armed) => from_fn(move |host: &H| {
                    host.cancel(armed.handle);
                    Ok::<_, HostError>(Applied::Done)
                })
                .boxed(),
                None => pure(Applied::Done).boxed(),
            },
            Instruction::ArmTimer { kind, after } => {
                let tick = Event::TimerTick(self.timing.next_elapsed());
                from_fn(move |host: &H| {
                    host.schedule_after(after, tick.clone())
                        .map(|handle| Applied::Armed(kind, handle))
                })
                .boxed()
            }
        }
    }
}
