//! The input interpreter.
//!
//! Orchestrates the full flow from a raw input line to a response.

use log::{debug, trace, warn};
use wayfarer_foundation::Result;

use crate::action::{Action, ActionDispatcher};
use crate::matcher::{DEFAULT_MAX_WINDOW, PhraseMatch, PhraseMatcher};
use crate::output::OutputSink;
use crate::phrasebook::Phrasebook;
use crate::state::GameState;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{FillerSet, PhraseTable};

/// Response for unrecognised input when feedback is enabled.
pub const NOT_UNDERSTOOD_RESPONSE: &str = "I don't understand that.";

/// How a line of input was understood, before anything is dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Lower-cased words with fillers removed
    pub tokens: Vec<String>,
    /// Where the winning phrase was found, if anywhere
    pub matched: Option<PhraseMatch>,
}

impl Classification {
    /// The action for the matched group, or `None` if nothing matched.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        self.matched.map(|m| Action::from_group_index(m.group))
    }

    /// The word right after the matched phrase, if there is one.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        let matched = self.matched?;
        self.tokens.get(matched.target_index()).map(String::as_str)
    }
}

/// Classifies input lines and emits responses.
///
/// The vocabulary and settings are fixed at construction.
#[derive(Clone, Debug)]
pub struct InputInterpreter {
    table: PhraseTable,
    fillers: FillerSet,
    max_window: usize,
    no_match_feedback: bool,
}

impl InputInterpreter {
    /// Creates an interpreter over the given vocabulary.
    #[must_use]
    pub fn new(phrasebook: Phrasebook) -> Self {
        let interpreter = Self {
            table: phrasebook.table,
            fillers: phrasebook.fillers,
            max_window: DEFAULT_MAX_WINDOW,
            no_match_feedback: false,
        };
        interpreter.warn_unreachable();
        interpreter
    }

    /// Creates an interpreter with the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Phrasebook::standard())
    }

    /// Sets how many words a single window may compose.
    #[must_use]
    pub fn with_max_window(mut self, max_window: usize) -> Self {
        self.max_window = max_window;
        self.warn_unreachable();
        self
    }

    /// Replies to unrecognised input instead of staying silent.
    #[must_use]
    pub const fn with_no_match_feedback(mut self, enabled: bool) -> Self {
        self.no_match_feedback = enabled;
        self
    }

    /// Returns the phrase table.
    #[must_use]
    pub const fn table(&self) -> &PhraseTable {
        &self.table
    }

    /// Returns the filler set.
    #[must_use]
    pub const fn fillers(&self) -> &FillerSet {
        &self.fillers
    }

    /// Returns the window size.
    #[must_use]
    pub const fn max_window(&self) -> usize {
        self.max_window
    }

    /// Tokenizes and matches input without dispatching.
    #[must_use]
    pub fn classify(&self, input: &str) -> Classification {
        let tokens = InputTokenizer::tokenize(input, &self.fillers);
        trace!("tokens: {tokens:?}");
        let matched = PhraseMatcher::find(&tokens, &self.table, self.max_window);
        Classification { tokens, matched }
    }

    /// Processes one line of player input.
    ///
    /// Returns the dispatched action, or `None` when nothing in the input
    /// matched. Unmatched input sends nothing to `sink` unless feedback was
    /// enabled with [`with_no_match_feedback`](Self::with_no_match_feedback).
    ///
    /// # Errors
    ///
    /// Returns a target error when a trigger or encounter phrase ends the
    /// input.
    pub fn process(
        &self,
        input: &str,
        state: &GameState,
        sink: &mut dyn OutputSink,
    ) -> Result<Option<Action>> {
        let classification = self.classify(input);
        let Some(matched) = classification.matched else {
            debug!("no phrase matched {input:?}");
            if self.no_match_feedback {
                sink.send_text(NOT_UNDERSTOOD_RESPONSE);
            }
            return Ok(None);
        };

        let action = Action::from_group_index(matched.group);
        debug!(
            "matched {action} (group {}, start {}, window {})",
            matched.group, matched.start, matched.window
        );
        ActionDispatcher::dispatch(action, &classification.tokens, matched, state, sink)?;
        Ok(Some(action))
    }

    fn warn_unreachable(&self) {
        for unreachable in self.table.unreachable_phrases(&self.fillers, self.max_window) {
            warn!(
                "phrase {:?} in group {} can never match: {}",
                unreachable.phrase, unreachable.group, unreachable.reason
            );
        }
    }
}

impl Default for InputInterpreter {
    fn default() -> Self {
        Self::standard()
    }
}
