//! Projection of the session into what the host draws.
//!
//! [`view`] only reads the session. The resulting [`View`] is plain data:
//! hosts can render it with [`View::to_html`], export it with
//! [`View::to_json`], or walk it directly.

mod html;

pub use html::PROMPT_FIELD_STYLES;

use crate::core::{DemoState, RenderedOutput, Session, State, Style, TranscriptEntry};
use serde::{Deserialize, Serialize};

/// Marker drawn in front of the prompt field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Caret {
    /// The session still accepts commands.
    Active,
    /// The walkthrough is over; the marker is dimmed.
    Closed,
}

impl Caret {
    pub fn for_state(state: DemoState) -> Self {
        if state.is_final() {
            Self::Closed
        } else {
            Self::Active
        }
    }

    /// Extra styling for the marker, if any.
    pub fn style(&self) -> Option<Style> {
        match self {
            Self::Active => None,
            Self::Closed => Some(Style::Comment),
        }
    }
}

/// One executed command: the echoed prompt and what it printed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptBlock {
    pub command: String,
    pub output: RenderedOutput,
}

impl TranscriptBlock {
    pub fn prompt_line(&self) -> String {
        format!("> {}", self.command)
    }
}

impl From<&TranscriptEntry> for TranscriptBlock {
    fn from(entry: &TranscriptEntry) -> Self {
        Self {
            command: entry.command.literal().to_string(),
            output: entry.output.clone(),
        }
    }
}

/// State of the live prompt field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineInputState {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub caret: Caret,
}

/// Everything the host needs to draw the terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub transcript: Vec<TranscriptBlock>,
    pub input: InlineInputState,
}

/// Project a session into a view.
///
/// # Example
///
/// ```rust
/// use birdie_terminal::core::Session;
/// use birdie_terminal::view::{view, Caret};
///
/// let view = view(&Session::new(1).with_pending_input("gle"));
/// assert!(view.transcript.is_empty());
/// assert_eq!(view.input.value, "gle");
/// assert_eq!(view.input.placeholder, "try running `gleam test`...");
/// assert_eq!(view.input.caret, Caret::Active);
/// ```
pub fn view(model: &Session) -> View {
    let state = model.state();
    View {
        transcript: model
            .transcript()
            .entries()
            .iter()
            .map(TranscriptBlock::from)
            .collect(),
        input: InlineInputState {
            value: model.pending_input().to_string(),
            placeholder: state.placeholder().to_string(),
            disabled: state.is_final(),
            caret: Caret::for_state(state),
        },
    }
}

impl View {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The terminal as unstyled text, ending with the live prompt line.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.transcript {
            out.push_str(&block.prompt_line());
            out.push('\n');
            out.push_str(&block.output.plain_text());
            out.push('\n');
        }
        out.push_str("> ");
        out.push_str(&self.input.value);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;

    fn submit(session: &Session, text: &str) -> Session {
        session.with_pending_input(text).submit().0
    }

    #[test]
    fn transcript_blocks_follow_history_order() {
        let session = submit(&submit(&Session::new(1), "ls"), "gleam test");
        let view = view(&session);

        let prompts: Vec<_> = view.transcript.iter().map(|b| b.prompt_line()).collect();
        assert_eq!(prompts, vec!["> ls", "> gleam test"]);
        assert_eq!(
            view.transcript[1].output,
            session.transcript().entries()[1].output
        );
    }

    #[test]
    fn placeholder_follows_state() {
        let session = submit(&Session::new(1), "gleam test");
        assert_eq!(
            view(&session).input.placeholder,
            "try running `gleam run -m birdie`"
        );
    }

    #[test]
    fn only_finished_disables_the_prompt() {
        let mut session = Session::new(1);
        for text in ["gleam test", "gleam run -m birdie", "a"] {
            session = submit(&session, text);
            let input = view(&session).input;
            assert!(!input.disabled);
            assert_eq!(input.caret, Caret::Active);
        }

        session = submit(&session, "gleam test");
        let input = view(&session).input;
        assert!(input.disabled);
        assert_eq!(input.caret, Caret::Closed);
        assert_eq!(input.placeholder, "the demo is over!");
    }

    #[test]
    fn caret_style_only_dims_when_closed() {
        assert_eq!(Caret::Active.style(), None);
        assert_eq!(Caret::Closed.style(), Some(Style::Comment));
    }

    #[test]
    fn block_uses_literal_command_text() {
        let session = submit(&Session::new(1), "   r  ");
        let block = &view(&session).transcript[0];
        assert_eq!(block.command, Command::Reject.literal());
    }

    #[test]
    fn plain_text_shows_prompt_and_outputs() {
        let session = submit(&Session::new(1), "hello").with_pending_input("gl");
        assert_eq!(
            view(&session).plain_text(),
            "> hello\nunknown command: hello\n> gl"
        );
    }

    #[test]
    fn view_serializes_to_json() {
        let session = submit(&Session::new(1), "gleam test");
        let json = view(&session).to_json().unwrap();
        let parsed: View = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, view(&session));
    }
}
