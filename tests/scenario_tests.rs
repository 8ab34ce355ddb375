//! End-to-end walkthroughs of the terminal.

use birdie_terminal::config::TerminalConfig;
use birdie_terminal::core::{Command, DemoState, Session};
use birdie_terminal::shell::{event_queue, HostCall, RecordingHost, Runtime};
use birdie_terminal::update::{update, Effect, Event, ScriptedTiming, ENTER};

fn enter(config: &TerminalConfig, session: &Session, line: &str) -> (Session, Vec<Effect>) {
    let (typed, _) = update(config, session, Event::InputChanged(line.to_string()));
    update(config, &typed, Event::KeyPressed(ENTER.to_string()))
}

fn play(lines: &[&str]) -> Session {
    let config = TerminalConfig::default();
    lines
        .iter()
        .fold(Session::new(3), |session, line| enter(&config, &session, line).0)
}

fn outputs(session: &Session) -> Vec<String> {
    session
        .transcript()
        .entries()
        .iter()
        .map(|entry| entry.output.plain_text())
        .collect()
}

#[test]
fn happy_path_reaches_finished() {
    let session = play(&["gleam test", "gleam run -m birdie", "a", "gleam test"]);

    assert_eq!(session.state(), DemoState::Finished);
    assert_eq!(
        session.transcript().get_path(),
        vec![
            DemoState::AwaitingFirstTest,
            DemoState::AwaitingReview,
            DemoState::AwaitingAcceptOrReject,
            DemoState::ReadyForFinalTest,
            DemoState::Finished,
        ]
    );

    let outputs = outputs(&session);
    assert!(outputs[0].starts_with("panic"));
    assert!(outputs[0].contains("Finished in 0.003 seconds"));
    assert!(outputs[0].ends_with("1 tests, 1 failures"));
    assert!(outputs[1].starts_with("Reviewing 1st out of 1"));
    assert!(outputs[2].contains("Accepted one snapshot"));
    assert_eq!(outputs[3], ".\n1 passed, no failures");
}

#[test]
fn rejecting_starts_over_with_the_same_failure() {
    let session = play(&["gleam test", "gleam run -m birdie", "r", "gleam test"]);

    assert_eq!(session.state(), DemoState::AwaitingReview);
    let outputs = outputs(&session);
    assert!(outputs[2].contains("Rejected one snapshot"));
    assert_eq!(outputs[0], outputs[3]);
    assert_eq!(
        session.transcript().entries()[0].output,
        session.transcript().entries()[3].output
    );
}

#[test]
fn running_tests_twice_before_review_is_allowed() {
    let session = play(&["gleam test", "gleam test", "gleam run -m birdie"]);
    assert_eq!(session.state(), DemoState::AwaitingAcceptOrReject);
    assert_eq!(session.transcript().len(), 3);
}

#[test]
fn reviewing_too_early_gives_a_hint() {
    let session = play(&["gleam run -m birdie"]);
    assert_eq!(session.state(), DemoState::AwaitingFirstTest);
    assert!(outputs(&session)[0].contains("No new snapshots to review"));
}

#[test]
fn reviewer_prompt_repeats_its_options() {
    let session = play(&["gleam test", "gleam run -m birdie", "gleam test", "gleam run -m birdie"]);
    assert_eq!(session.state(), DemoState::AwaitingAcceptOrReject);
    let outputs = outputs(&session);
    assert_eq!(outputs[2], "the options are [a]ccept or [r]eject");
    assert_eq!(outputs[3], "the options are [a]ccept or [r]eject");
}

#[test]
fn empty_and_blank_lines_are_unknown_commands() {
    let session = play(&["", "   "]);
    assert_eq!(session.state(), DemoState::AwaitingFirstTest);
    assert_eq!(session.transcript().len(), 2);
    for entry in session.transcript().entries() {
        assert_eq!(entry.command, Command::Unrecognized(String::new()));
        assert_eq!(entry.output.plain_text(), "unknown command: ");
    }
}

#[test]
fn answers_outside_review_are_unknown() {
    let session = play(&["a", "r"]);
    assert_eq!(session.state(), DemoState::AwaitingFirstTest);
    assert_eq!(outputs(&session), vec!["unknown command: a", "unknown command: r"]);
}

#[test]
fn finished_session_keeps_answering() {
    let session = play(&["gleam test", "gleam run -m birdie", "a", "gleam test", "gleam test", "ls"]);
    assert_eq!(session.state(), DemoState::Finished);
    let outputs = outputs(&session);
    assert!(outputs[4].contains("No new snapshots to review"));
    assert_eq!(outputs[5], "unknown command: ls");
}

#[test]
fn only_test_runs_arm_the_timer() {
    let config = TerminalConfig::default();
    let mut session = Session::new(1);
    for line in ["ls", "gleam test", "gleam run -m birdie", "a", "gleam test"] {
        let (next, effects) = enter(&config, &session, line);
        let arms_timer = effects.iter().any(|e| matches!(e, Effect::ArmTimer { .. }));
        assert_eq!(arms_timer, line == "gleam test", "line {line:?}");
        session = next;
    }
}

#[tokio::test]
async fn runtime_walkthrough_with_recording_host() {
    let config = TerminalConfig::default();
    let (sender, queue) = event_queue();
    let host = RecordingHost::new(&sender).with_mount_point(config.mount_selector.clone());
    let mut runtime = Runtime::start_with_timing(config, host, queue, ScriptedTiming::new([2, 5, 4])).unwrap();
    assert_eq!(runtime.session().elapsed(), 2);

    sender.submit_line("gleam test").unwrap();
    runtime.drain().await;
    assert_eq!(runtime.session().state(), DemoState::AwaitingReview);
    assert!(outputs(runtime.session())[0].contains("Finished in 0.002 seconds"));

    assert_eq!(runtime.host().fire_all().unwrap(), 1);
    runtime.drain().await;
    assert_eq!(runtime.session().elapsed(), 5);

    sender.submit_line("r").unwrap();
    sender.submit_line("gleam test").unwrap();
    runtime.drain().await;
    assert!(outputs(runtime.session())[2].contains("Finished in 0.005 seconds"));

    let last = runtime.host().last_view().unwrap();
    assert_eq!(last.transcript.len(), 3);
    assert!(runtime
        .host()
        .calls()
        .iter()
        .any(|call| matches!(call, HostCall::Focus(id) if id == "terminal-prompt-field")));
}
