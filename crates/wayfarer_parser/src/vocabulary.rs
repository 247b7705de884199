//! Phrase tables and filler sets.
//!
//! A [`PhraseTable`] is an ordered list of [`PhraseGroup`]s. The position of a
//! group in the table is its action identifier and also its matching
//! priority, so a table is built once and never reordered.

use std::collections::{BTreeSet, HashSet};

use wayfarer_foundation::{Error, Result};

/// A named set of alternative phrases that share one intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseGroup {
    /// Display name of the group (e.g. "move")
    pub name: String,
    /// Phrases in declared (priority) order
    pub phrases: Vec<String>,
}

impl PhraseGroup {
    /// Creates a group from a name and its phrases.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

/// A phrase that can never be matched under the current settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnreachablePhrase {
    /// Index of the group the phrase belongs to
    pub group: usize,
    /// The phrase itself
    pub phrase: String,
    /// Why it can never match
    pub reason: &'static str,
}

/// Ordered, immutable table of phrase groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseTable {
    groups: Vec<PhraseGroup>,
}

impl PhraseTable {
    /// Builds a table from groups in priority order.
    ///
    /// # Errors
    ///
    /// Returns an error if a group has no phrases or a phrase is blank.
    pub fn new(groups: Vec<PhraseGroup>) -> Result<Self> {
        for group in &groups {
            if group.phrases.is_empty() {
                return Err(Error::invalid_phrase(
                    group.name.as_str(),
                    "",
                    "group has no phrases",
                ));
            }
            if let Some(blank) = group.phrases.iter().find(|p| p.trim().is_empty()) {
                return Err(Error::invalid_phrase(
                    group.name.as_str(),
                    blank.as_str(),
                    "phrase is blank",
                ));
            }
        }
        Ok(Self { groups })
    }

    /// Builds a table from built-in data that is known to be valid.
    pub(crate) fn from_static(groups: &[(&str, &[&str])]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|(name, phrases)| PhraseGroup::new(*name, phrases.iter().copied()))
                .collect(),
        }
    }

    /// Returns the groups in priority order.
    #[must_use]
    pub fn groups(&self) -> &[PhraseGroup] {
        &self.groups
    }

    /// Returns the group at `index`, if any.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&PhraseGroup> {
        self.groups.get(index)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every distinct word used by any phrase, sorted.
    #[must_use]
    pub fn words(&self) -> BTreeSet<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.phrases.iter())
            .flat_map(|p| p.split(' '))
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Finds phrases that tokenized input can never produce.
    ///
    /// Input is lower-cased, split on single spaces and stripped of fillers
    /// before matching, and at most `max_window` words are composed.
    #[must_use]
    pub fn unreachable_phrases(
        &self,
        fillers: &FillerSet,
        max_window: usize,
    ) -> Vec<UnreachablePhrase> {
        let mut found = Vec::new();
        for (group, g) in self.groups.iter().enumerate() {
            for phrase in &g.phrases {
                let words: Vec<&str> = phrase.split(' ').collect();
                let reason = if words.len() > max_window {
                    Some("longer than the match window")
                } else if words.iter().any(|w| fillers.contains(w)) {
                    Some("contains a filler word")
                } else if phrase.chars().any(char::is_uppercase) {
                    Some("contains upper-case letters")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    found.push(UnreachablePhrase {
                        group,
                        phrase: phrase.clone(),
                        reason,
                    });
                }
            }
        }
        found
    }
}

/// Words removed from input before matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FillerSet {
    words: HashSet<String>,
}

impl FillerSet {
    /// Creates an empty filler set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filler set from words.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a filler word.
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Whether `word` is a filler.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of filler words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
