//! Input tokenization.
//!
//! Converts raw player input into the word sequence the matcher scans.

use crate::vocabulary::FillerSet;

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Lower-cases the whole input
    /// - Splits on single spaces, so runs of spaces produce empty words
    /// - Drops every word that is in `fillers`, keeping the order of the rest
    ///
    /// The standard filler set contains `""`, which is what removes the empty
    /// words left by doubled, leading or trailing spaces.
    #[must_use]
    pub fn tokenize(input: &str, fillers: &FillerSet) -> Vec<String> {
        input
            .to_lowercase()
            .split(' ')
            .filter(|word| !fillers.contains(word))
            .map(str::to_string)
            .collect()
    }
}
