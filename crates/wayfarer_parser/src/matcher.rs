//! Phrase matching.
//!
//! Scans a token sequence for the first phrase in a [`PhraseTable`]. The
//! search order is fixed and decides every tie:
//!
//! 1. groups in table order
//! 2. phrases in declared order within a group
//! 3. token start positions, left to right
//! 4. window lengths, from the maximum down to one word
//!
//! The first window whose composed text equals the phrase wins. Multi-word
//! phrases only outrank their prefixes ("look at" over "look") when both are
//! declared and the longer one comes first.

use crate::vocabulary::PhraseTable;

/// Default maximum number of words composed into one window.
pub const DEFAULT_MAX_WINDOW: usize = 2;

/// Where a phrase was found in the token sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhraseMatch {
    /// Index of the matched group in the table
    pub group: usize,
    /// Index of the first matched token
    pub start: usize,
    /// Number of tokens the phrase covers
    pub window: usize,
}

impl PhraseMatch {
    /// Index of the token right after the matched window.
    #[must_use]
    pub const fn target_index(&self) -> usize {
        self.start + self.window
    }
}

/// Finds phrases in token sequences.
pub struct PhraseMatcher;

impl PhraseMatcher {
    /// Finds the first phrase of `table` present in `tokens`.
    ///
    /// Returns `None` when no phrase of any group matches anywhere.
    #[must_use]
    pub fn find(tokens: &[String], table: &PhraseTable, max_window: usize) -> Option<PhraseMatch> {
        for (group, entry) in table.groups().iter().enumerate() {
            for phrase in &entry.phrases {
                for start in 0..tokens.len() {
                    if let Some(window) = Self::match_at(tokens, start, phrase, max_window) {
                        return Some(PhraseMatch {
                            group,
                            start,
                            window,
                        });
                    }
                }
            }
        }
        None
    }

    /// Tries every window length at `start`, longest first.
    fn match_at(tokens: &[String], start: usize, phrase: &str, max_window: usize) -> Option<usize> {
        (1..=max_window)
            .rev()
            .find(|&window| Self::compose(tokens, start, window).is_some_and(|text| text == phrase))
    }

    /// Joins `window` tokens starting at `start` with single spaces.
    ///
    /// Returns `None` if the window runs past the end of `tokens`.
    #[must_use]
    pub fn compose(tokens: &[String], start: usize, window: usize) -> Option<String> {
        let end = start.checked_add(window)?;
        let words = tokens.get(start..end)?;
        Some(words.join(" ").trim().to_string())
    }
}
