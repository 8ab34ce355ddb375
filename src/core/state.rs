//! Narrative states of the demo session.
//!
//! All states implement the [`State`] trait, which provides pure methods
//! for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are immutable values
/// describing the current position in the demo's narrative.
///
/// # Required Traits
///
/// - `Clone`: States are copied into every transcript entry
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel to the host inside views
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states accept no further state changes.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Stage of the snapshot-testing walkthrough.
    ///
    /// A session starts in `AwaitingFirstTest` and moves towards `Finished`.
    /// The only backwards edge is rejecting a snapshot, which returns to
    /// `AwaitingFirstTest`.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum DemoState {
        /// Nothing has run yet; the test suite is expected next.
        #[default]
        AwaitingFirstTest,
        /// A snapshot test failed and left a new snapshot to review.
        AwaitingReview,
        /// The reviewer is showing the new snapshot.
        AwaitingAcceptOrReject,
        /// The snapshot was accepted; running the tests again will pass.
        ReadyForFinalTest,
        /// The walkthrough is over.
        Finished,
    }
    final: [Finished]
}

impl DemoState {
    /// Every state, in narrative order.
    pub const ALL: [DemoState; 5] = [
        Self::AwaitingFirstTest,
        Self::AwaitingReview,
        Self::AwaitingAcceptOrReject,
        Self::ReadyForFinalTest,
        Self::Finished,
    ];

    /// Placeholder shown in the empty prompt field while in this state.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::AwaitingFirstTest => "try running `gleam test`...",
            Self::AwaitingReview => "try running `gleam run -m birdie`",
            Self::AwaitingAcceptOrReject => "try accepting the snapshot with `a`",
            Self::ReadyForFinalTest => "try running `gleam test` again now...",
            Self::Finished => "the demo is over!",
        }
    }
}
