//! Dispatch tests.
//!
//! Full `process` calls against the standard vocabulary.

use wayfarer_foundation::ErrorKind;
use wayfarer_parser::action::{
    CONFUSED_RESPONSE, DIALOGUE_RESPONSE, INVENTORY_RESPONSE, MOVE_RESPONSE, OBSERVE_RESPONSE,
};
use wayfarer_parser::interpreter::NOT_UNDERSTOOD_RESPONSE;
use wayfarer_parser::{Action, BufferedOutput, GameState, InputInterpreter, Phrasebook};

fn process_in(input: &str, state: &GameState) -> (Option<Action>, Vec<String>) {
    let mut out = BufferedOutput::new();
    let action = InputInterpreter::standard()
        .process(input, state, &mut out)
        .unwrap();
    (action, out.take())
}

fn process(input: &str) -> (Option<Action>, Vec<String>) {
    process_in(input, &GameState::new())
}

#[test]
fn fixed_responses() {
    assert_eq!(process("go to the cave"), (Some(Action::Move), vec![MOVE_RESPONSE.to_string()]));
    assert_eq!(process("Look"), (Some(Action::Observe), vec![OBSERVE_RESPONSE.to_string()]));
    assert_eq!(process("open bag"), (Some(Action::Inventory), vec![INVENTORY_RESPONSE.to_string()]));
    assert_eq!(process("ask the wizard"), (Some(Action::Dialogue), vec![DIALOGUE_RESPONSE.to_string()]));
}

#[test]
fn inventory_response_wording() {
    assert_eq!(INVENTORY_RESPONSE, "You looked trough your inventory!");
}

#[test]
fn trigger_names_the_word_after_the_phrase() {
    let (action, messages) = process("I use a sword");
    assert_eq!(action, Some(Action::Trigger));
    assert_eq!(messages, ["You attacked sword!"]);
}

#[test]
fn two_word_trigger_phrase() {
    let (action, messages) = process("put on the ring");
    assert_eq!(action, Some(Action::Trigger));
    assert_eq!(messages, ["You attacked ring!"]);
}

#[test]
fn encounter_names_the_word_after_the_phrase() {
    let (action, messages) = process("attack the goblin now");
    assert_eq!(action, Some(Action::Encounter));
    assert_eq!(messages, ["You attacked goblin!"]);
}

#[test]
fn target_fault_when_phrase_ends_input() {
    let mut out = BufferedOutput::new();
    let err = InputInterpreter::standard()
        .process("I use", &GameState::new(), &mut out)
        .unwrap_err();
    match err.kind {
        ErrorKind::TargetOutOfRange {
            action,
            index,
            length,
        } => {
            assert_eq!(action, "trigger");
            assert_eq!(index, 1);
            assert_eq!(length, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(out.messages().is_empty());
}

#[test]
fn selections_are_silent_in_and_out_of_encounters() {
    let mut state = GameState::new();
    assert_eq!(process_in("first", &state), (Some(Action::SelectOne), vec![]));
    state.enter_encounter();
    assert_eq!(process_in("4", &state), (Some(Action::SelectFour), vec![]));
    assert_eq!(process_in("i choose three", &state), (Some(Action::SelectThree), vec![]));
}

#[test]
fn no_match_is_silent() {
    assert_eq!(process("dance wildly"), (None, vec![]));
    assert_eq!(process("the a i"), (None, vec![]));
}

#[test]
fn no_match_feedback_is_opt_in() {
    let interpreter = InputInterpreter::standard().with_no_match_feedback(true);
    let mut out = BufferedOutput::new();
    assert_eq!(interpreter.process("dance", &GameState::new(), &mut out).unwrap(), None);
    assert_eq!(out.messages(), [NOT_UNDERSTOOD_RESPONSE]);
}

#[test]
fn eleventh_group_is_confused() {
    let mut source = wayfarer_parser::stdlib::STANDARD_PHRASEBOOK.to_string();
    source.push_str("(group: dance \"dance\")\n");
    let interpreter = InputInterpreter::new(Phrasebook::parse(&source).unwrap());
    let mut out = BufferedOutput::new();
    let action = interpreter.process("dance", &GameState::new(), &mut out).unwrap();
    assert_eq!(action, Some(Action::None));
    assert_eq!(out.messages(), [CONFUSED_RESPONSE]);
}
