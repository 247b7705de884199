//! Phrasebook tests.
//!
//! Loading vocabularies from source text and files.

use std::fs;

use wayfarer_foundation::ErrorKind;
use wayfarer_parser::stdlib;
use wayfarer_parser::{Action, BufferedOutput, GameState, InputInterpreter, Phrasebook};

#[test]
fn standard_source_is_the_standard_vocabulary() {
    let book = Phrasebook::parse(stdlib::STANDARD_PHRASEBOOK).unwrap();
    assert_eq!(book.table, stdlib::standard_table());
    assert_eq!(book.fillers, stdlib::standard_fillers());
}

#[test]
fn custom_vocabulary_drives_the_interpreter() {
    let book = Phrasebook::parse(
        r#"
        ;; walking comes first
        (group: move "walk")
        (group: observe "peer")
        (filler: "please" "")
        "#,
    )
    .unwrap();
    let interpreter = InputInterpreter::new(book);
    let mut out = BufferedOutput::new();

    let action = interpreter
        .process("please PEER around", &GameState::new(), &mut out)
        .unwrap();
    assert_eq!(action, Some(Action::Observe));

    // "look" is not in this vocabulary
    let action = interpreter.process("look", &GameState::new(), &mut out).unwrap();
    assert_eq!(action, None);
    assert_eq!(out.messages(), ["You observed the environment!"]);
}

#[test]
fn parse_error_reports_line_and_column() {
    let err = Phrasebook::parse("(group: move \"go\")\n  (group: move go)").unwrap_err();
    match err.kind {
        ErrorKind::ParseError {
            line,
            column,
            context,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, 16);
            assert_eq!(context, "  (group: move go)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn blank_phrase_is_invalid() {
    let err = Phrasebook::parse("(group: move \"go\" \"  \")").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPhrase { .. }));
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("wayfarer-phrases-{}.txt", std::process::id()));
    fs::write(&path, "(group: move \"hop\")\n").unwrap();

    let book = Phrasebook::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(book.table.len(), 1);
    assert_eq!(book.table.group(0).unwrap().phrases, ["hop"]);
}

#[test]
fn load_parse_error_carries_path() {
    let path = std::env::temp_dir().join(format!("wayfarer-bad-{}.txt", std::process::id()));
    fs::write(&path, "(verb: hop)").unwrap();

    let err = Phrasebook::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
    let source = err.context.unwrap().source.unwrap();
    assert_eq!(source, path.display().to_string());
}
