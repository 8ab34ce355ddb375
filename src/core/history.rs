//! Transcript of executed commands.
//!
//! Provides immutable, append-only tracking of every submitted command and
//! the output it produced, following functional programming principles.

use super::command::Command;
use super::output::RenderedOutput;
use super::state::DemoState;
use serde::{Deserialize, Serialize};

/// Record of a single submitted command.
///
/// Entries are immutable values: the command as parsed, the output the
/// transition table produced for it, and the states on either side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// The command that was submitted
    pub command: Command,
    /// What the terminal printed in response
    pub output: RenderedOutput,
    /// State the session was in when the command was submitted
    pub from: DemoState,
    /// State the session moved to
    pub to: DemoState,
}

/// Ordered transcript of executed commands.
///
/// The transcript is immutable - the `record` method returns a new
/// transcript with the entry added. Insertion order is execution order.
///
/// # Example
///
/// ```rust
/// use birdie_terminal::core::{transition, Command, DemoState, Transcript, TranscriptEntry};
///
/// let transcript = Transcript::new();
/// let (to, output) = transition(DemoState::AwaitingFirstTest, &Command::RunTests, 1);
/// let transcript = transcript.record(TranscriptEntry {
///     command: Command::RunTests,
///     output,
///     from: DemoState::AwaitingFirstTest,
///     to,
/// });
///
/// assert_eq!(transcript.len(), 1);
/// assert_eq!(
///     transcript.get_path(),
///     vec![DemoState::AwaitingFirstTest, DemoState::AwaitingReview]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create a new empty transcript.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new transcript.
    ///
    /// This is a pure function - it does not mutate the existing transcript
    /// but returns a new one with the entry appended.
    pub fn record(&self, entry: TranscriptEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the state before the first entry, then the `to` state of each
    /// entry. Commands that changed nothing repeat the previous state.
    pub fn get_path(&self) -> Vec<DemoState> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }

    /// Get all entries in execution order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcripts;

    fn entry(command: Command, from: DemoState, to: DemoState) -> TranscriptEntry {
        TranscriptEntry {
            output: transcripts::unknown_command(&command),
            command,
            from,
            to,
        }
    }

    #[test]
    fn new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.get_path().is_empty());
        assert!(transcript.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let transcript = Transcript::new();
        let next = transcript.record(entry(
            Command::RunTests,
            DemoState::AwaitingFirstTest,
            DemoState::AwaitingReview,
        ));

        assert_eq!(transcript.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn entries_keep_execution_order() {
        let transcript = Transcript::new()
            .record(entry(
                Command::Unrecognized("one".into()),
                DemoState::AwaitingFirstTest,
                DemoState::AwaitingFirstTest,
            ))
            .record(entry(
                Command::Unrecognized("two".into()),
                DemoState::AwaitingFirstTest,
                DemoState::AwaitingFirstTest,
            ));

        let literals: Vec<_> = transcript
            .entries()
            .iter()
            .map(|e| e.command.literal())
            .collect();
        assert_eq!(literals, vec!["one", "two"]);
        assert_eq!(
            transcript.last().map(|e| e.command.literal()),
            Some("two")
        );
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let transcript = Transcript::new()
            .record(entry(
                Command::RunTests,
                DemoState::AwaitingFirstTest,
                DemoState::AwaitingReview,
            ))
            .record(entry(
                Command::RunReview,
                DemoState::AwaitingReview,
                DemoState::AwaitingAcceptOrReject,
            ));

        assert_eq!(
            transcript.get_path(),
            vec![
                DemoState::AwaitingFirstTest,
                DemoState::AwaitingReview,
                DemoState::AwaitingAcceptOrReject,
            ]
        );
    }

    #[test]
    fn transcript_serializes_correctly() {
        let transcript = Transcript::new().record(entry(
            Command::Accept,
            DemoState::AwaitingAcceptOrReject,
            DemoState::ReadyForFinalTest,
        ));
        let json = serde_json::to_string(&transcript).unwrap();
        let deserialized: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(transcript, deserialized);
    }
}
