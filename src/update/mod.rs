//! The update loop.
//!
//! [`update`] is the single entry point for external events. It takes the
//! current session and returns the next one together with the effects the
//! host should perform. Effects are declarative: nothing here touches a
//! timer, a DOM element or a clock.

pub mod timing;

pub use timing::{FixedTiming, RandomTiming, ScriptedTiming, TimingSource};

use crate::config::TerminalConfig;
use crate::core::{Command, Session, State};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Key that submits the pending input.
pub const ENTER: &str = "Enter";

/// Input forwarded by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The prompt field now holds this text.
    InputChanged(String),
    /// A key was pressed in the prompt field.
    KeyPressed(String),
    /// A timing timer fired with a freshly drawn elapsed value.
    TimerTick(u32),
}

/// Timers the update loop may arm. At most one of each kind is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Re-draws the elapsed seed after a test run.
    TestTiming,
}

/// Instruction for the host, returned alongside the next session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Focus an element without scrolling the page.
    FocusWithoutScroll(String),
    /// Scroll an element into view.
    ScrollIntoView(String),
    /// Cancel the pending timer of this kind, if any.
    CancelTimer(TimerKind),
    /// Arm a one-shot timer that posts a [`Event::TimerTick`].
    ArmTimer { kind: TimerKind, after: Duration },
}

/// Apply one event to the session.
///
/// # Example
///
/// ```rust
/// use birdie_terminal::config::TerminalConfig;
/// use birdie_terminal::core::{DemoState, Session};
/// use birdie_terminal::update::{update, Event};
///
/// let config = TerminalConfig::default();
/// let session = Session::new(1);
///
/// let (session, _) = update(&config, &session, Event::InputChanged("gleam test".into()));
/// let (session, effects) = update(&config, &session, Event::KeyPressed("Enter".into()));
///
/// assert_eq!(session.state(), DemoState::AwaitingReview);
/// assert_eq!(effects.len(), 4);
/// ```
pub fn update(config: &TerminalConfig, model: &Session, event: Event) -> (Session, Vec<Effect>) {
    match event {
        Event::InputChanged(text) => (model.with_pending_input(text), Vec::new()),
        Event::KeyPressed(key) if key == ENTER => submit(config, model),
        Event::KeyPressed(_) => (model.clone(), Vec::new()),
        Event::TimerTick(elapsed) => {
            debug!(elapsed, "timing seed refreshed");
            (model.with_elapsed(elapsed), Vec::new())
        }
    }
}

fn submit(config: &TerminalConfig, model: &Session) -> (Session, Vec<Effect>) {
    let (next, command) = model.submit();
    let (from, to) = (model.state(), next.state());
    debug!(
        from = from.name(),
        to = to.name(),
        command = %command,
        "command submitted"
    );

    let mut effects = vec![
        Effect::FocusWithoutScroll(config.prompt_field_id.clone()),
        Effect::ScrollIntoView(config.prompt_field_id.clone()),
    ];
    if command == Command::RunTests {
        effects.push(Effect::CancelTimer(TimerKind::TestTiming));
        effects.push(Effect::ArmTimer {
            kind: TimerKind::TestTiming,
            after: config.timer_delay(),
        });
    }
    (next, effects)
}
