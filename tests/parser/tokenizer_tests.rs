//! Tokenizer tests.
//!
//! Tests for turning raw input into filtered words.

use wayfarer_parser::stdlib;
use wayfarer_parser::{FillerSet, InputTokenizer};

fn tokenize(input: &str) -> Vec<String> {
    InputTokenizer::tokenize(input, &stdlib::standard_fillers())
}

#[test]
fn tokenize_lowercases_and_drops_fillers() {
    assert_eq!(tokenize("I use a sword"), ["use", "sword"]);
}

#[test]
fn tokenize_drops_blanks_from_repeated_spaces() {
    assert_eq!(tokenize("  look   at  "), ["look", "at"]);
}

#[test]
fn tokenize_only_fillers_is_empty() {
    assert!(tokenize("The a I").is_empty());
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_keeps_punctuation() {
    assert_eq!(tokenize("Look!"), ["look!"]);
}

#[test]
fn tokenize_splits_on_space_only() {
    assert_eq!(tokenize("go\tnorth"), ["go\tnorth"]);
}

#[test]
fn tokenize_without_empty_filler_keeps_blanks() {
    let fillers = FillerSet::from_words(["the"]);
    assert_eq!(
        InputTokenizer::tokenize("go  the door", &fillers),
        ["go", "", "door"]
    );
}
