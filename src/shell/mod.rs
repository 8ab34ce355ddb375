//! The imperative shell around the pure core.
//!
//! The core decides what should happen; this module makes it happen. A
//! [`Runtime`] owns one session, pulls events from its [`EventQueue`] one at
//! a time, and carries out the returned effects through a [`Host`].
//!
//! # Example
//!
//! ```rust
//! use birdie_terminal::config::TerminalConfig;
//! use birdie_terminal::core::DemoState;
//! use birdie_terminal::shell::{event_queue, RecordingHost, Runtime};
//! use birdie_terminal::update::FixedTiming;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let (sender, queue) = event_queue();
//! let host = RecordingHost::new(&sender).with_mount_point("#terminal");
//! let mut runtime = Runtime::start_with_timing(TerminalConfig::default(), host, queue, FixedTiming(2)).unwrap();
//!
//! sender.submit_line("gleam test").unwrap();
//! runtime.drain().await;
//!
//! assert_eq!(runtime.session().state(), DemoState::AwaitingReview);
//! # });
//! ```

mod error;
mod host;
mod queue;
mod recording;
mod runtime;
mod tokio_host;

pub use error::{HostError, StartError};
pub use host::{Host, TimerHandle};
pub use queue::{event_queue, EventQueue, EventSender, WeakEventSender};
pub use recording::{HostCall, RecordingHost};
pub use runtime::Runtime;
pub use tokio_host::TokioHost;
