//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the terminal:
//! - Narrative states via the `State` trait
//! - The command interpreter and transition table
//! - Styled output and the immutable transcript
//! - The session model threaded through every update
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod macros;

mod command;
mod history;
pub mod output;
mod session;
mod state;
pub mod transcripts;
mod transition;

pub use command::{parse, Command};
pub use history::{Transcript, TranscriptEntry};
pub use output::{Block, Node, RenderedOutput, Style};
pub use session::Session;
pub use state::{DemoState, State};
pub use transition::transition;
