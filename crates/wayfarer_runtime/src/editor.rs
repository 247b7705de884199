//! Line editor abstraction for the REPL.
//!
//! The REPL only talks to [`LineEditor`], so tests can drive it with scripted
//! input while the binary uses rustyline.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use wayfarer_foundation::{Error, ErrorKind, Result};
use wayfarer_parser::{FillerSet, PhraseTable};

use crate::highlight::PhraseHighlighter;

/// Meta commands offered for completion after a leading `:`.
pub const META_COMMANDS: &[&str] = &[
    ":help",
    ":quit",
    ":encounter on",
    ":encounter off",
    ":tokens",
    ":phrases",
];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Tell the editor which words the interpreter understands.
    fn set_vocabulary(&mut self, table: &PhraseTable, fillers: &FillerSet);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct WayfarerHelper {
    #[rustyline(Completer)]
    completer: PhraseCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: PhraseHighlighter,
}

impl Highlighter for WayfarerHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes phrase words, or meta commands after a leading `:`.
struct PhraseCompleter {
    words: Vec<String>,
}

impl PhraseCompleter {
    fn new(table: &PhraseTable) -> Self {
        Self {
            words: table.words().into_iter().map(str::to_string).collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let head = &line[..pos];
        if head.starts_with(':') {
            let candidates = META_COMMANDS
                .iter()
                .filter(|command| command.starts_with(head))
                .map(|command| Pair {
                    display: (*command).to_string(),
                    replacement: (*command).to_string(),
                })
                .collect();
            return (0, candidates);
        }

        let start = head.rfind(' ').map_or(0, |i| i + 1);
        let word = head[start..].to_lowercase();
        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(&word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for PhraseCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<WayfarerHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor that knows the given vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(table: &PhraseTable, fillers: &FillerSet) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = WayfarerHelper {
            completer: PhraseCompleter::new(table),
            hinter: HistoryHinter::new(),
            highlighter: PhraseHighlighter::new(table, fillers),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e.into()),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_vocabulary(&mut self, table: &PhraseTable, fillers: &FillerSet) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer = PhraseCompleter::new(table);
            helper.highlighter = PhraseHighlighter::new(table, fillers);
        }
    }
}
