//! The session model.
//!
//! A [`Session`] is replaced, never mutated: every operation borrows the
//! current model and returns the next one.

use super::command::{parse, Command};
use super::history::{Transcript, TranscriptEntry};
use super::state::DemoState;
use super::transition::transition;
use serde::{Deserialize, Serialize};

/// Everything the terminal knows about one visitor's walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: DemoState,
    pending_input: String,
    transcript: Transcript,
    elapsed: u32,
}

impl Session {
    /// Start a session with the given timing seed.
    ///
    /// ```
    /// use birdie_terminal::core::{DemoState, Session};
    ///
    /// let session = Session::new(3);
    /// assert_eq!(session.state(), DemoState::AwaitingFirstTest);
    /// assert!(session.transcript().is_empty());
    /// ```
    pub fn new(elapsed: u32) -> Self {
        Self {
            state: DemoState::AwaitingFirstTest,
            pending_input: String::new(),
            transcript: Transcript::new(),
            elapsed,
        }
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Same session with the prompt field showing `text`.
    pub fn with_pending_input(&self, text: impl Into<String>) -> Self {
        Self {
            pending_input: text.into(),
            ..self.clone()
        }
    }

    /// Same session with a new timing seed.
    pub fn with_elapsed(&self, elapsed: u32) -> Self {
        Self {
            elapsed,
            ..self.clone()
        }
    }

    /// Submit the pending input.
    ///
    /// Parses the prompt text, runs the transition table, appends the result
    /// to the transcript and clears the prompt. Returns the next session
    /// together with the command that was executed.
    pub fn submit(&self) -> (Self, Command) {
        let command = parse(&self.pending_input);
        let (next_state, output) = transition(self.state, &command, self.elapsed);
        let transcript = self.transcript.record(TranscriptEntry {
            command: command.clone(),
            output,
            from: self.state,
            to: next_state,
        });

        let next = Self {
            state: next_state,
            pending_input: String::new(),
            transcript,
            elapsed: self.elapsed,
        };
        (next, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_pending_input_only_touches_input() {
        let session = Session::new(2);
        let typed = session.with_pending_input("gleam");
        assert_eq!(typed.pending_input(), "gleam");
        assert_eq!(typed.state(), session.state());
        assert_eq!(typed.elapsed(), session.elapsed());
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn with_elapsed_only_touches_elapsed() {
        let session = Session::new(2).with_pending_input("a");
        let retimed = session.with_elapsed(6);
        assert_eq!(retimed.elapsed(), 6);
        assert_eq!(retimed.pending_input(), "a");
        assert_eq!(session.elapsed(), 2);
    }

    #[test]
    fn submit_records_and_clears_input() {
        let session = Session::new(1).with_pending_input(" gleam test ");
        let (next, command) = session.submit();

        assert_eq!(command, Command::RunTests);
        assert_eq!(next.state(), DemoState::AwaitingReview);
        assert_eq!(next.pending_input(), "");
        assert_eq!(next.transcript().len(), 1);

        let entry = &next.transcript().entries()[0];
        assert_eq!(entry.from, DemoState::AwaitingFirstTest);
        assert_eq!(entry.to, DemoState::AwaitingReview);
        assert!(entry.output.plain_text().contains("Finished in 0.001 seconds"));
    }

    #[test]
    fn submit_leaves_previous_session_untouched() {
        let session = Session::new(1).with_pending_input("gleam test");
        let _ = session.submit();
        assert_eq!(session.state(), DemoState::AwaitingFirstTest);
        assert_eq!(session.pending_input(), "gleam test");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn submitting_nothing_is_an_unknown_command() {
        let (next, command) = Session::new(1).with_pending_input("   ").submit();
        assert_eq!(command, Command::Unrecognized(String::new()));
        assert_eq!(next.state(), DemoState::AwaitingFirstTest);
        assert_eq!(
            next.transcript().entries()[0].output.plain_text(),
            "unknown command: "
        );
    }
}
