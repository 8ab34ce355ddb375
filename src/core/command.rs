//! Command interpreter for the prompt line.
//!
//! Only four literal commands are understood. Anything else, including
//! empty input, is kept verbatim as [`Command::Unrecognized`].

use serde::{Deserialize, Serialize};
use std::fmt;

const RUN_TESTS: &str = "gleam test";
const RUN_REVIEW: &str = "gleam run -m birdie";
const ACCEPT: &str = "a";
const REJECT: &str = "r";

/// A command typed at the simulated prompt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `gleam test`
    RunTests,
    /// `gleam run -m birdie`
    RunReview,
    /// `a`, accepting the snapshot under review
    Accept,
    /// `r`, rejecting the snapshot under review
    Reject,
    /// Any other input, trimmed.
    Unrecognized(String),
}

impl Command {
    /// The text echoed on the prompt line for this command.
    ///
    /// ```
    /// use birdie_terminal::core::Command;
    ///
    /// assert_eq!(Command::RunReview.literal(), "gleam run -m birdie");
    /// assert_eq!(Command::Unrecognized("ls".into()).literal(), "ls");
    /// ```
    pub fn literal(&self) -> &str {
        match self {
            Self::RunTests => RUN_TESTS,
            Self::RunReview => RUN_REVIEW,
            Self::Accept => ACCEPT,
            Self::Reject => REJECT,
            Self::Unrecognized(text) => text,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Parse raw prompt text into a command.
///
/// Surrounding whitespace is trimmed, then the text is compared literally
/// and case-sensitively. There is no prefix or partial matching.
///
/// ```
/// use birdie_terminal::core::{parse, Command};
///
/// assert_eq!(parse("  gleam test \n"), Command::RunTests);
/// assert_eq!(parse("Gleam test"), Command::Unrecognized("Gleam test".into()));
/// ```
pub fn parse(text: &str) -> Command {
    match text.trim() {
        RUN_TESTS => Command::RunTests,
        RUN_REVIEW => Command::RunReview,
        ACCEPT => Command::Accept,
        REJECT => Command::Reject,
        other => Command::Unrecognized(other.to_string()),
    }
}
