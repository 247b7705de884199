//! Batch script tests.

use std::fs;
use std::path::PathBuf;

use wayfarer_foundation::ErrorKind;
use wayfarer_parser::{BufferedOutput, InputInterpreter};
use wayfarer_runtime::Session;

fn script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wayfarer-{name}-{}.txt", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn session() -> Session<BufferedOutput> {
    Session::with_view(InputInterpreter::standard(), BufferedOutput::new())
}

#[test]
fn script_runs_every_line() {
    let path = script("walk", "go to the gate\n\nlook at the gate\nI use a key\n");
    let mut session = session();
    let count = session.run_script(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        session.view().messages(),
        [
            "You moved to a new area!",
            "You observed the environment!",
            "You attacked key!",
        ]
    );
}

#[test]
fn target_fault_aborts_with_file_and_line() {
    let path = script("fault", "look\n\nfight\nlook\n");
    let mut session = session();
    let err = session.run_script(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err.kind, ErrorKind::TargetOutOfRange { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source, Some(path.display().to_string()));
    assert_eq!(context.line, Some(3));
    assert_eq!(session.view().messages(), ["You observed the environment!"]);
}

#[test]
fn missing_script_is_io_error() {
    let mut session = session();
    let err = session
        .run_script(std::path::Path::new("/nonexistent/wayfarer-script.txt"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(session.turns(), 0);
}
