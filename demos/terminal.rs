//! Interactive Terminal
//!
//! Plays the birdie walkthrough in your own terminal. Every line read from
//! stdin is typed into the prompt and submitted, exactly like pressing Enter
//! in the browser.
//!
//! Key concepts:
//! - The runtime owns the session and executes effects through a host
//! - `TokioHost` arms real timers that post back into the event queue
//! - The session ends when stdin closes
//!
//! Run with: cargo run --example terminal [-- path/to/terminal.toml]
//! Set `RUST_LOG=birdie_terminal=debug` to watch effects being executed.

use birdie_terminal::config::TerminalConfig;
use birdie_terminal::shell::{event_queue, Runtime, TokioHost};
use birdie_terminal::view::View;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn print_new_blocks(view: &View, printed: &AtomicUsize) {
    let seen = printed.load(Ordering::SeqCst);
    if view.transcript.len() <= seen {
        return;
    }
    for block in &view.transcript[seen..] {
        println!("{}", block.output.plain_text());
    }
    printed.store(view.transcript.len(), Ordering::SeqCst);
    println!("\n({})", view.input.placeholder);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TerminalConfig::load(&PathBuf::from(path))?,
        None => TerminalConfig::default(),
    };

    let (sender, queue) = event_queue();
    let printed = Arc::new(AtomicUsize::new(0));
    let host = TokioHost::new(&sender)
        .with_mount_point(config.mount_selector.clone())
        .on_render(move |view| print_new_blocks(view, &printed));

    println!("=== Birdie Terminal ===");
    println!("(try running `gleam test`...)");
    let runtime = Runtime::start(config, host, queue)?;

    let input = async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if sender.submit_line(line).is_err() {
                break;
            }
        }
    };

    let ((), session) = tokio::join!(input, runtime.run());

    println!(
        "\n=== Session closed in {:?} after {} commands ===",
        session.state(),
        session.transcript().len()
    );
    Ok(())
}
