//! Textual source format for vocabularies.
//!
//! A phrasebook declares phrase groups in priority order plus optional
//! filler words:
//!
//! ```text
//! ;; comment to end of line
//! (group: move "go to" "enter" "through")
//! (group: observe "look at" "look")
//! (filler: "a" "the" "")
//! ```
//!
//! When no `filler:` form is present the standard filler set is used.

use std::fs;
use std::path::Path;

use log::debug;
use wayfarer_foundation::{Error, ErrorContext, Result};

use crate::stdlib;
use crate::vocabulary::{FillerSet, PhraseGroup, PhraseTable};

/// A phrase table together with its filler words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrasebook {
    /// Phrase groups in priority order
    pub table: PhraseTable,
    /// Words dropped before matching
    pub fillers: FillerSet,
}

impl Phrasebook {
    /// The built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            table: stdlib::standard_table(),
            fillers: stdlib::standard_fillers(),
        }
    }

    /// Parses phrasebook source.
    ///
    /// # Errors
    ///
    /// Returns a parse error with line and column for malformed source, or an
    /// invalid phrase error for empty groups and blank phrases.
    pub fn parse(source: &str) -> Result<Self> {
        let mut reader = SourceReader::new(source);
        let mut groups = Vec::new();
        let mut fillers: Option<FillerSet> = None;

        loop {
            reader.skip_trivia();
            let Some(c) = reader.peek_char() else {
                break;
            };
            if c != '(' {
                return Err(reader.error(format!("expected '(' but found '{c}'")));
            }
            reader.advance();
            reader.skip_trivia();

            let head = reader.scan_name()?;
            reader.expect(':')?;
            match head.as_str() {
                "group" => {
                    reader.skip_trivia();
                    let name = reader.scan_name()?;
                    let phrases = reader.scan_strings()?;
                    groups.push(PhraseGroup { name, phrases });
                }
                "filler" => {
                    let set = fillers.get_or_insert_with(FillerSet::new);
                    for word in reader.scan_strings()? {
                        set.insert(word);
                    }
                }
                other => return Err(reader.error(format!("unknown form '{other}:'"))),
            }
        }

        debug!("parsed phrasebook with {} groups", groups.len());
        Ok(Self {
            table: PhraseTable::new(groups)?,
            fillers: fillers.unwrap_or_else(stdlib::standard_fillers),
        })
    }

    /// Reads and parses a phrasebook file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse. The
    /// error carries the file path as context.
    pub fn load(path: &Path) -> Result<Self> {
        let context = || ErrorContext::new().with_source(path.display().to_string());
        let source = fs::read_to_string(path).map_err(|e| Error::from(e).with_context(context()))?;
        Self::parse(&source).map_err(|e| e.with_context(context()))
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::standard()
    }
}

/// Character cursor over phrasebook source.
struct SourceReader<'src> {
    /// Full source, for error context lines.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> SourceReader<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.rest = &self.rest[c.len_utf8()..];
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace and `;` comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else if c == ';' {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{expected}' but found '{c}'"))),
            None => Err(self.error(format!("expected '{expected}' but found end of input"))),
        }
    }

    /// Scans a bare name such as `group` or `select-one`.
    fn scan_name(&mut self) -> Result<String> {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(self.error("expected a name"));
        }
        Ok(name)
    }

    /// Scans quoted strings up to and including the closing `)`.
    fn scan_strings(&mut self) -> Result<Vec<String>> {
        let mut strings = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek_char() {
                Some('"') => strings.push(self.scan_string()?),
                Some(')') => {
                    self.advance();
                    return Ok(strings);
                }
                Some(c) => return Err(self.error(format!("expected a string or ')' but found '{c}'"))),
                None => return Err(self.error("unterminated form")),
            }
        }
    }

    fn scan_string(&mut self) -> Result<String> {
        self.advance(); // consume opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    return Ok(text);
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some(c @ ('"' | '\\')) => {
                            self.advance();
                            text.push(c);
                        }
                        Some(c) => return Err(self.error(format!("unknown escape '\\{c}'"))),
                        None => return Err(self.error("unterminated string")),
                    }
                }
                Some('\n') | None => return Err(self.error("unterminated string")),
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        let context = self
            .source
            .lines()
            .nth(self.line as usize - 1)
            .unwrap_or_default();
        Error::parse_error(message, self.line, self.column, context)
    }
}
