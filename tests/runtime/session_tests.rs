//! Session tests.

use test_log::test;
use wayfarer_parser::{Action, BufferedOutput, InputInterpreter};
use wayfarer_runtime::Session;

fn session() -> Session<BufferedOutput> {
    Session::with_view(InputInterpreter::standard(), BufferedOutput::new())
}

#[test]
fn turns_accumulate() {
    let mut session = session();
    for line in ["look", "xyzzy", "go to town"] {
        let _ = session.process(line);
    }
    assert_eq!(session.turns(), 3);
    assert_eq!(
        session.view().messages(),
        ["You observed the environment!", "You moved to a new area!"]
    );
}

#[test]
fn encounter_state_is_visible_to_selections() {
    let mut session = session();
    session.enter_encounter();
    assert_eq!(session.process("third").unwrap(), Some(Action::SelectThree));
    session.leave_encounter();
    assert_eq!(session.process("third").unwrap(), Some(Action::SelectThree));
    assert!(session.view().messages().is_empty());
}

#[test]
fn feedback_setting_reaches_session() {
    let interpreter = InputInterpreter::standard().with_no_match_feedback(true);
    let mut session = Session::with_view(interpreter, BufferedOutput::new());
    assert_eq!(session.process("sing").unwrap(), None);
    assert_eq!(session.view().last(), Some("I don't understand that."));
}
