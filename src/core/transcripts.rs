//! Canned tool output shown by the simulated terminal.

use super::command::Command;
use super::output::{span, text, Node, RenderedOutput, Style};

const BIRD: &str = "\u{1F426}\u{200D}\u{2B1B} ";

const NEW_SNAPSHOT_RULE: &str = "── new snapshot ────────────────────────────────────────────\n";
const DIFF_TOP_RULE: &str = "────────┬───────────────────────────────────────────────────\n";
const DIFF_BOTTOM_RULE: &str = "────────┴───────────────────────────────────────────────────\n";

const DIFF_INDENT: &str = "      ";

const SNAPSHOT_DIFF: &str = "1 + usage: lucysay [-m message] [-f file]
      2 +
      3 +  -m, --message  the message to be printed
      4 +  -f, --file     a file to read the message from
      5 +  -h, --help     show this help text";

fn labelled(indent: &str, label: &str, value: Vec<Node>) -> Vec<Node> {
    let mut nodes = vec![text(indent), span(Style::Info, label), text(": ")];
    nodes.extend(value);
    nodes.push(text("\n"));
    nodes
}

fn snapshot_diff() -> Vec<Node> {
    vec![
        text(DIFF_TOP_RULE),
        text(DIFF_INDENT),
        span(Style::New, SNAPSHOT_DIFF),
        text("\n"),
        text(DIFF_BOTTOM_RULE),
    ]
}

/// `gleam test` with a fresh, unreviewed snapshot.
pub fn failing_test_run(elapsed: u32) -> RenderedOutput {
    let mut nodes = vec![
        span(Style::Error, "panic"),
        text(" test/example_test.gleam:9\n"),
    ];
    nodes.extend(labelled(" ", "test", vec![text("example_test.usage_text_test")]));
    nodes.extend(labelled(" ", "info", vec![text("Birdie snapshot test failed")]));
    nodes.push(text("\n"));
    nodes.push(text(NEW_SNAPSHOT_RULE));
    nodes.extend(labelled("  ", "title", vec![text("testing the help text")]));
    nodes.extend(labelled(
        "  ",
        "hint",
        vec![span(
            Style::Warning,
            "run `gleam run -m birdie` to review the snapshots",
        )],
    ));
    nodes.extend(snapshot_diff());
    nodes.push(text(format!("\nFinished in 0.00{elapsed} seconds\n")));
    nodes.push(span(Style::Error, "1 tests, 1 failures"));
    RenderedOutput::code(nodes)
}

/// `gleam run -m birdie` with one snapshot waiting.
pub fn snapshot_review() -> RenderedOutput {
    let mut nodes = vec![
        text("Reviewing "),
        span(Style::Warning, "1st"),
        text(" out of "),
        span(Style::Warning, "1"),
        text("\n\n"),
        text(NEW_SNAPSHOT_RULE),
    ];
    nodes.extend(labelled("  ", "title", vec![text("testing the help text")]));
    nodes.extend(labelled("  ", "file", vec![text("./test/cli.gleam")]));
    nodes.extend(snapshot_diff());
    nodes.extend([
        text("\n  "),
        span(Style::New, "a"),
        text(" accept     accept the new snapshot\n  "),
        span(Style::Error, "r"),
        text(" reject     reject the new snapshot"),
    ]);
    RenderedOutput::code(nodes)
}

/// Reviewing when there is nothing to review.
pub fn no_new_snapshots() -> RenderedOutput {
    RenderedOutput::paragraph(vec![
        text(format!("{BIRD}No new snapshots to review\n")),
        span(Style::Info, "Hint"),
        text(": "),
        span(Style::Warning, "did you forget to run `gleam test`?"),
    ])
}

/// Any command the reviewer prompt does not accept.
pub fn accept_or_reject_hint() -> RenderedOutput {
    RenderedOutput::line(vec![text("the options are [a]ccept or [r]eject")])
}

pub fn accepted() -> RenderedOutput {
    RenderedOutput::line(vec![text(BIRD), span(Style::New, "Accepted one snapshot")])
}

pub fn rejected() -> RenderedOutput {
    RenderedOutput::line(vec![text(BIRD), span(Style::Error, "Rejected one snapshot")])
}

/// `gleam test` once the snapshot has been accepted.
pub fn passing_test_run() -> RenderedOutput {
    RenderedOutput::paragraph(vec![span(Style::New, ".\n1 passed, no failures")])
}

pub fn unknown_command(command: &Command) -> RenderedOutput {
    RenderedOutput::line(vec![text(format!("unknown command: {}", command.literal()))])
}
