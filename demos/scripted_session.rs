//! Scripted Session
//!
//! Drives the pure update loop with a fixed script and prints what a visitor
//! would see after every command. No runtime or host is involved: effects are
//! printed instead of executed.
//!
//! Run with: cargo run --example scripted_session [-- --html]

use birdie_terminal::config::TerminalConfig;
use birdie_terminal::core::Session;
use birdie_terminal::update::{update, Event, ENTER};
use birdie_terminal::view::{view, TranscriptBlock};
use birdie_terminal::State;
use tracing_subscriber::EnvFilter;

const SCRIPT: [&str; 7] = [
    "gleam run -m birdie",
    "gleam test",
    "gleam run -m birdie",
    "r",
    "gleam test",
    "gleam run -m birdie",
    "a",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let html = std::env::args().any(|arg| arg == "--html");
    let config = TerminalConfig::default();
    let mut session = Session::new(4);

    println!("=== Scripted Session ===\n");

    for line in SCRIPT.iter().chain(std::iter::once(&"gleam test")) {
        let (typed, _) = update(&config, &session, Event::InputChanged(line.to_string()));
        let (next, effects) = update(&config, &typed, Event::KeyPressed(ENTER.to_string()));
        session = next;

        if let Some(entry) = session.transcript().last() {
            println!("{}", TranscriptBlock::from(entry).prompt_line());
            println!("{}", entry.output.plain_text());
            println!("  [{} -> {}]", entry.from.name(), entry.to.name());
        }
        for effect in effects {
            println!("  effect: {effect:?}");
        }
        println!();
    }

    println!("Path taken: {:?}", session.transcript().get_path());

    if html {
        println!("\n{}", view(&session).to_html(&config.prompt_field_id));
    }
}
