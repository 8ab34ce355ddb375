//! The transition table.
//!
//! A pure, total function from the current state and a submitted command to
//! the next state and the output to show. Combinations the walkthrough does
//! not care about fall through to an "unknown command" reply that leaves the
//! state where it was.

use super::command::Command;
use super::output::RenderedOutput;
use super::state::DemoState;
use super::transcripts;

/// Compute the next state and the output for `command` submitted in `state`.
///
/// `elapsed` is the session's pseudo-random timing, printed by the failing
/// test run. It has no influence on which state comes next.
///
/// # Example
///
/// ```rust
/// use birdie_terminal::core::{transition, Command, DemoState};
///
/// let (next, output) = transition(DemoState::AwaitingFirstTest, &Command::RunTests, 3);
/// assert_eq!(next, DemoState::AwaitingReview);
/// assert!(output.plain_text().contains("1 tests, 1 failures"));
/// ```
pub fn transition(state: DemoState, command: &Command, elapsed: u32) -> (DemoState, RenderedOutput) {
    use Command::*;
    use DemoState::*;

    if let Unrecognized(_) = command {
        return (state, transcripts::unknown_command(command));
    }

    match (state, command) {
        (AwaitingFirstTest | AwaitingReview, RunTests) => {
            (AwaitingReview, transcripts::failing_test_run(elapsed))
        }
        (AwaitingReview, RunReview) => (AwaitingAcceptOrReject, transcripts::snapshot_review()),
        (AwaitingFirstTest | ReadyForFinalTest, RunReview) => {
            (state, transcripts::no_new_snapshots())
        }

        (AwaitingAcceptOrReject, RunTests | RunReview) => {
            (state, transcripts::accept_or_reject_hint())
        }
        (AwaitingAcceptOrReject, Accept) => (ReadyForFinalTest, transcripts::accepted()),
        (AwaitingAcceptOrReject, Reject) => (AwaitingFirstTest, transcripts::rejected()),

        (ReadyForFinalTest, RunTests) => (Finished, transcripts::passing_test_run()),

        // The walkthrough is over: every recognised command gets the same
        // "nothing to review" reply as an early review would.
        (Finished, _) => (Finished, transcripts::no_new_snapshots()),

        _ => (state, transcripts::unknown_command(command)),
    }
}
