//! The interactive read-process-print loop.
//!
//! Lines starting with `:` are meta commands handled here; everything else is
//! player input for the [`Session`]. Meta command output goes to the same
//! view as game responses.

use std::io::{self, Write};

use wayfarer_foundation::{Error, ErrorKind, Result};
use wayfarer_parser::OutputSink;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use crate::view::ConsoleView;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, V: OutputSink = ConsoleView> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session<V>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, ConsoleView> {
    /// Creates a REPL over `session` using the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let interpreter = session.interpreter();
        let editor = RustylineEditor::new(interpreter.table(), interpreter.fillers())?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor, V: OutputSink> Repl<E, V> {
    /// Creates a REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session<V>) -> Self {
        let interpreter = session.interpreter();
        editor.set_vocabulary(interpreter.table(), interpreter.fillers());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<V> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<V> {
        &mut self.session
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(keep_going) => Ok(keep_going),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line: a meta command or player input.
    ///
    /// Returns `Ok(false)` when the line asks the REPL to exit.
    ///
    /// # Errors
    ///
    /// Returns interpreter errors and malformed meta command errors.
    pub fn eval(&mut self, line: &str) -> Result<bool> {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.meta(command);
        }

        self.session.process(line)?;
        Ok(true)
    }

    fn meta(&mut self, command: &str) -> Result<bool> {
        let (name, argument) = command
            .split_once(' ')
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "quit" | "q" => return Ok(false),
            "help" | "h" => self.help(),
            "encounter" => match argument {
                "on" => {
                    self.session.enter_encounter();
                    self.notice("Encounter started.");
                }
                "off" => {
                    self.session.leave_encounter();
                    self.notice("Encounter ended.");
                }
                "" => {
                    let status = if self.session.state().in_encounter() {
                        "In an encounter."
                    } else {
                        "Not in an encounter."
                    };
                    self.notice(status);
                }
                other => {
                    return Err(Error::new(ErrorKind::Internal(format!(
                        "expected :encounter on|off, got '{other}'"
                    ))));
                }
            },
            "tokens" => self.tokens(argument),
            "phrases" => self.phrases(),
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown command ':{other}' (try :help)"
                ))));
            }
        }
        Ok(true)
    }

    fn tokens(&mut self, input: &str) {
        let classification = self.session.interpreter().classify(input);
        let mut report = vec![format!("tokens: {:?}", classification.tokens)];
        match (classification.matched, classification.action()) {
            (Some(m), Some(action)) => {
                report.push(format!(
                    "match: {action} (group {}, start {}, window {})",
                    m.group, m.start, m.window
                ));
                if action.takes_target() {
                    let target = classification.target().unwrap_or("<missing>");
                    report.push(format!("target: {target}"));
                }
            }
            _ => report.push("match: none".to_string()),
        }
        for line in report {
            self.notice(&line);
        }
    }

    fn phrases(&mut self) {
        let lines: Vec<String> = self
            .session
            .interpreter()
            .table()
            .groups()
            .iter()
            .enumerate()
            .map(|(i, group)| format!("{i:>2} {}: {}", group.name, group.phrases.join(", ")))
            .collect();
        for line in lines {
            self.notice(&line);
        }
    }

    fn help(&mut self) {
        for line in [
            "Type what you want to do, e.g. \"look at the door\".",
            ":help              Show this help",
            ":quit              Exit",
            ":encounter on|off  Start or end an encounter",
            ":tokens <text>     Show how input is understood",
            ":phrases           List recognised phrases",
        ] {
            self.notice(line);
        }
    }

    fn notice(&mut self, message: &str) {
        self.session.view_mut().send_text(message);
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mWayfarer v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type :help for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

/// Prints an error, with its context when there is one, to stderr.
pub fn print_error(error: &Error) {
    match &error.context {
        Some(context) => eprintln!("\x1b[31mError: {error} {context}\x1b[0m"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}
