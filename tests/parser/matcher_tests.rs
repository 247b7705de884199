//! Phrase matching tests.
//!
//! Group order decides, then phrase order, then position, then the longest
//! window.

use wayfarer_parser::stdlib;
use wayfarer_parser::{Action, InputInterpreter, PhraseGroup, PhraseMatch, PhraseMatcher, PhraseTable};

fn find(tokens: &[&str], table: &PhraseTable) -> Option<PhraseMatch> {
    let tokens: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    PhraseMatcher::find(&tokens, table, 2)
}

#[test]
fn earlier_group_beats_earlier_position() {
    let m = find(&["use", "key", "to", "enter"], &stdlib::standard_table()).unwrap();
    assert_eq!(m.group, 0);
    assert_eq!(m.start, 3);
}

#[test]
fn earlier_phrase_in_group_wins() {
    let m = find(&["look", "at", "door"], &stdlib::standard_table()).unwrap();
    assert_eq!((m.group, m.start, m.window), (1, 0, 2));
    assert_eq!(m.target_index(), 2);
}

#[test]
fn first_position_wins_within_phrase() {
    let table = PhraseTable::new(vec![PhraseGroup::new("g", ["x"])]).unwrap();
    let m = find(&["y", "x", "x"], &table).unwrap();
    assert_eq!(m.start, 1);
}

#[test]
fn two_word_phrase_needs_both_words() {
    assert!(find(&["put"], &stdlib::standard_table()).is_none());
    let m = find(&["put", "on", "ring"], &stdlib::standard_table()).unwrap();
    assert_eq!((m.group, m.window), (3, 2));
}

#[test]
fn no_match_for_unknown_words() {
    assert!(find(&["xyzzy", "plugh"], &stdlib::standard_table()).is_none());
    assert!(find(&[], &stdlib::standard_table()).is_none());
}

#[test]
fn phrases_longer_than_window_never_match() {
    let table = PhraseTable::new(vec![PhraseGroup::new("g", ["pick up now"])]).unwrap();
    assert!(find(&["pick", "up", "now"], &table).is_none());

    let tokens: Vec<String> = ["pick", "up", "now"].iter().map(ToString::to_string).collect();
    assert!(PhraseMatcher::find(&tokens, &table, 3).is_some());
}

#[test]
fn uppercase_phrase_is_unreachable() {
    let table = PhraseTable::new(vec![PhraseGroup::new("g", ["Look"])]).unwrap();
    let unreachable = table.unreachable_phrases(&stdlib::standard_fillers(), 2);
    assert_eq!(unreachable.len(), 1);
    assert_eq!(unreachable[0].phrase, "Look");
}

#[test]
fn classify_reports_target() {
    let c = InputInterpreter::standard().classify("Talk to the guard");
    assert_eq!(c.tokens, ["talk", "to", "guard"]);
    assert_eq!(c.action(), Some(Action::Dialogue));
    assert_eq!(c.target(), Some("guard"));
}
