//! Session state for a game in progress.
//!
//! The session owns the [`GameState`] that outlives single input lines and
//! hands it to the interpreter on every call.

use std::fs;
use std::path::Path;

use log::{debug, info};
use wayfarer_foundation::{Error, ErrorContext, Result};
use wayfarer_parser::{Action, GameState, InputInterpreter, OutputSink};

use crate::view::ConsoleView;

/// A running game: interpreter, state, and the view it talks to.
pub struct Session<V: OutputSink = ConsoleView> {
    /// Interpreter for player input.
    interpreter: InputInterpreter,

    /// State that persists across turns.
    state: GameState,

    /// Where responses go.
    view: V,

    /// Number of lines processed.
    turns: u64,
}

impl Session<ConsoleView> {
    /// Creates a session with the standard vocabulary printing to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::with_view(InputInterpreter::standard(), ConsoleView::new())
    }
}

impl Default for Session<ConsoleView> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: OutputSink> Session<V> {
    /// Creates a session with the given interpreter and view.
    pub fn with_view(interpreter: InputInterpreter, view: V) -> Self {
        Self {
            interpreter,
            state: GameState::new(),
            view,
            turns: 0,
        }
    }

    /// Returns the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &InputInterpreter {
        &self.interpreter
    }

    /// Returns the game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns a mutable reference to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Number of input lines processed so far.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Starts an encounter.
    pub fn enter_encounter(&mut self) {
        info!("entering encounter");
        self.state.enter_encounter();
    }

    /// Ends the current encounter.
    pub fn leave_encounter(&mut self) {
        info!("leaving encounter");
        self.state.leave_encounter();
    }

    /// Processes one line of player input against the current state.
    ///
    /// # Errors
    ///
    /// Propagates interpreter errors, such as a missing target word.
    pub fn process(&mut self, line: &str) -> Result<Option<Action>> {
        self.turns += 1;
        self.interpreter.process(line, &self.state, &mut self.view)
    }

    /// Feeds every non-blank line of a script file to [`process`](Self::process).
    ///
    /// Returns the number of lines processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. The first line that fails
    /// aborts the script; its error carries the file and line number.
    pub fn run_script(&mut self, path: &Path) -> Result<usize> {
        let name = path.display().to_string();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&name)))?;
        self.run_lines(&source, &name)
    }

    /// Feeds every non-blank line of `source` to [`process`](Self::process).
    ///
    /// `name` identifies the source in error context.
    ///
    /// # Errors
    ///
    /// Stops at the first failing line and returns its error with the
    /// source name and line number attached.
    pub fn run_lines(&mut self, source: &str, name: &str) -> Result<usize> {
        let mut processed = 0;
        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let number = index + 1;
            debug!("{name}:{number}: {line}");
            self.process(line).map_err(|e| {
                e.with_context(ErrorContext::new().with_source(name).with_line(number))
            })?;
            processed += 1;
        }
        Ok(processed)
    }
}
