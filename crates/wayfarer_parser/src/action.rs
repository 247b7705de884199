//! Actions and their dispatch.
//!
//! Every phrase group maps to one [`Action`] by its position in the table.
//! The [`ActionDispatcher`] turns a matched action into player-visible text.

use std::fmt;

use log::debug;
use wayfarer_foundation::{Error, Result};

use crate::matcher::PhraseMatch;
use crate::output::OutputSink;
use crate::state::GameState;

/// Response for [`Action::Move`].
pub const MOVE_RESPONSE: &str = "You moved to a new area!";
/// Response for [`Action::Observe`].
pub const OBSERVE_RESPONSE: &str = "You observed the environment!";
/// Response for [`Action::Inventory`].
pub const INVENTORY_RESPONSE: &str = "You looked trough your inventory!";
/// Response for [`Action::Dialogue`].
pub const DIALOGUE_RESPONSE: &str = "You talked to a subject!";
/// Response for [`Action::None`].
pub const CONFUSED_RESPONSE: &str = "You stare ahead blankly with confusion...";

/// What the player intends to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Travel somewhere
    Move,
    /// Look around or at something
    Observe,
    /// Check carried items
    Inventory,
    /// Use an item; the next word is the target
    Trigger,
    /// Talk to someone
    Dialogue,
    /// Attack someone; the next word is the target
    Encounter,
    /// First encounter choice
    SelectOne,
    /// Second encounter choice
    SelectTwo,
    /// Third encounter choice
    SelectThree,
    /// Fourth encounter choice
    SelectFour,
    /// No known action for the group
    None,
}

impl Action {
    /// All actions reachable from a group index, in table order.
    pub const INDEXED: [Action; 10] = [
        Action::Move,
        Action::Observe,
        Action::Inventory,
        Action::Trigger,
        Action::Dialogue,
        Action::Encounter,
        Action::SelectOne,
        Action::SelectTwo,
        Action::SelectThree,
        Action::SelectFour,
    ];

    /// Maps a phrase group index to its action.
    #[must_use]
    pub const fn from_group_index(index: usize) -> Self {
        match index {
            0 => Action::Move,
            1 => Action::Observe,
            2 => Action::Inventory,
            3 => Action::Trigger,
            4 => Action::Dialogue,
            5 => Action::Encounter,
            6 => Action::SelectOne,
            7 => Action::SelectTwo,
            8 => Action::SelectThree,
            9 => Action::SelectFour,
            _ => Action::None,
        }
    }

    /// Lower-case name used in logs and listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Observe => "observe",
            Action::Inventory => "inventory",
            Action::Trigger => "trigger",
            Action::Dialogue => "dialogue",
            Action::Encounter => "encounter",
            Action::SelectOne => "select-one",
            Action::SelectTwo => "select-two",
            Action::SelectThree => "select-three",
            Action::SelectFour => "select-four",
            Action::None => "none",
        }
    }

    /// The choice number for selection actions.
    #[must_use]
    pub const fn selection(self) -> Option<u8> {
        match self {
            Action::SelectOne => Some(1),
            Action::SelectTwo => Some(2),
            Action::SelectThree => Some(3),
            Action::SelectFour => Some(4),
            _ => None,
        }
    }

    /// Whether the action reads the word after the matched phrase.
    #[must_use]
    pub const fn takes_target(self) -> bool {
        matches!(self, Action::Trigger | Action::Encounter)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Executes actions against an output sink.
pub struct ActionDispatcher;

impl ActionDispatcher {
    /// Emits the response for `action`.
    ///
    /// `tokens` and `matched` locate the target word for actions that take
    /// one. Selection actions emit nothing and are only traced.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TargetOutOfRange`](wayfarer_foundation::ErrorKind::TargetOutOfRange)
    /// when a trigger or encounter phrase is the last thing in the input.
    /// Nothing is sent to the sink in that case.
    pub fn dispatch(
        action: Action,
        tokens: &[String],
        matched: PhraseMatch,
        state: &GameState,
        sink: &mut dyn OutputSink,
    ) -> Result<()> {
        match action {
            Action::Move => sink.send_text(MOVE_RESPONSE),
            Action::Observe => sink.send_text(OBSERVE_RESPONSE),
            Action::Inventory => sink.send_text(INVENTORY_RESPONSE),
            Action::Dialogue => sink.send_text(DIALOGUE_RESPONSE),
            Action::Trigger | Action::Encounter => {
                let index = matched.target_index();
                let target = tokens
                    .get(index)
                    .ok_or_else(|| Error::target_out_of_range(action.name(), index, tokens.len()))?;
                sink.send_text(&format!("You attacked {target}!"));
            }
            Action::SelectOne | Action::SelectTwo | Action::SelectThree | Action::SelectFour => {
                // TODO: route choices into the active encounter once encounters exist
                debug!(
                    "selection {} (in encounter: {})",
                    action.selection().unwrap_or_default(),
                    state.in_encounter()
                );
            }
            Action::None => sink.send_text(CONFUSED_RESPONSE),
        }
        Ok(())
    }
}
