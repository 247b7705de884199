//! Input highlighting for the REPL.

use std::borrow::Cow;
use std::collections::HashSet;

use wayfarer_parser::{FillerSet, PhraseTable};

/// Highlights words the interpreter will recognise.
///
/// Phrase words are cyan, filler words are dimmed, and a leading `:command`
/// is green. Spacing is left untouched.
pub struct PhraseHighlighter {
    words: HashSet<String>,
    fillers: FillerSet,
}

impl PhraseHighlighter {
    /// Creates a highlighter for the given vocabulary.
    #[must_use]
    pub fn new(table: &PhraseTable, fillers: &FillerSet) -> Self {
        Self {
            words: table.words().into_iter().map(str::to_string).collect(),
            fillers: fillers.clone(),
        }
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        for (i, word) in line.split(' ').enumerate() {
            if i > 0 {
                result.push(' ');
            }
            let lower = word.to_lowercase();
            let color = if i == 0 && word.starts_with(':') {
                "\x1b[32m" // green
            } else if word.is_empty() {
                ""
            } else if self.words.contains(&lower) {
                "\x1b[1;36m" // bold cyan
            } else if self.fillers.contains(&lower) {
                "\x1b[2m" // dim
            } else {
                ""
            };

            if color.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(color);
                result.push_str(word);
                result.push_str("\x1b[0m");
            }
        }

        Cow::Owned(result)
    }
}
