//! Birdie terminal: a simulated snapshot-testing session for the web.
//!
//! The terminal follows the "pure core, imperative shell" philosophy. A
//! visitor types a handful of literal commands into a prompt; the pure core
//! walks a small narrative state machine (run the tests, review the new
//! snapshot, accept or reject it, run the tests again) and produces styled
//! transcripts. The shell executes the timers, focus and scroll requests the
//! core asks for.
//!
//! # Core Concepts
//!
//! - **State**: the narrative stage, via the `State` trait and [`DemoState`]
//! - **Transition table**: [`transition`], pure and total
//! - **Session**: the model replaced on every event, see [`Session`]
//! - **Update loop**: [`update::update`] returns the next session and
//!   declarative [`update::Effect`]s
//! - **View**: [`view::view`] projects a session for the host
//! - **Shell**: [`shell::Runtime`] runs effects against a [`shell::Host`]
//!
//! # Example
//!
//! ```rust
//! use birdie_terminal::config::TerminalConfig;
//! use birdie_terminal::core::{DemoState, Session};
//! use birdie_terminal::update::{update, Event};
//!
//! let config = TerminalConfig::default();
//! let mut session = Session::new(3);
//!
//! for line in ["gleam test", "gleam run -m birdie", "a", "gleam test"] {
//!     session = update(&config, &session, Event::InputChanged(line.into())).0;
//!     session = update(&config, &session, Event::KeyPressed("Enter".into())).0;
//! }
//!
//! assert_eq!(session.state(), DemoState::Finished);
//! assert_eq!(session.transcript().len(), 4);
//! ```

pub mod config;
pub mod core;
pub mod shell;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use crate::core::{parse, transition, Command, DemoState, RenderedOutput, Session, State};
