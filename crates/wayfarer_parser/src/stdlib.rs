//! Standard vocabulary for the adventure.
//!
//! Group order matters: it is both the matching priority and the action
//! mapping (see [`Action::from_group_index`](crate::action::Action::from_group_index)).

use crate::vocabulary::{FillerSet, PhraseTable};

/// Phrases for traversing the world.
pub const MOVE: &[&str] = &["go to", "enter", "through"];

/// Phrases for viewing the world.
pub const OBSERVE: &[&str] = &["look at", "look", "observe", "view"];

/// Phrases for viewing the inventory.
pub const INVENTORY: &[&str] = &[
    "inventory",
    "bag",
    "stuff",
    "items",
    "weapons",
    "potions",
    "armour",
    "armor",
];

/// Phrases for triggering an item.
pub const TRIGGER: &[&str] = &[
    "use", "trigger", "activate", "operate", "equip", "hold", "put on",
];

/// Phrases for speaking with characters.
pub const DIALOGUE: &[&str] = &["speak with", "talk to", "speak", "talk", "converse", "ask"];

/// Phrases for beginning an encounter.
pub const ENCOUNTER: &[&str] = &["attack", "fight", "assassinate", "assult", "kill", "murder"];

/// First encounter choice.
pub const SELECT_ONE: &[&str] = &["1", "one", "first"];

/// Second encounter choice.
pub const SELECT_TWO: &[&str] = &["2", "two", "second"];

/// Third encounter choice.
pub const SELECT_THREE: &[&str] = &["3", "three", "third"];

/// Fourth encounter choice.
pub const SELECT_FOUR: &[&str] = &["4", "four", "fourth"];

/// Words dropped from input before matching.
///
/// The empty string removes the blanks left by repeated spaces.
pub const FILLERS: &[&str] = &["a", "i", "the", ""];

/// Standard groups in priority order.
pub const GROUPS: &[(&str, &[&str])] = &[
    ("move", MOVE),
    ("observe", OBSERVE),
    ("inventory", INVENTORY),
    ("trigger", TRIGGER),
    ("dialogue", DIALOGUE),
    ("encounter", ENCOUNTER),
    ("select-one", SELECT_ONE),
    ("select-two", SELECT_TWO),
    ("select-three", SELECT_THREE),
    ("select-four", SELECT_FOUR),
];

/// The standard vocabulary in phrasebook source form.
pub const STANDARD_PHRASEBOOK: &str = r#"
;; Traversing the world
(group: move "go to" "enter" "through")

;; Viewing the world ("look at" must precede "look")
(group: observe "look at" "look" "observe" "view")

;; Inventory
(group: inventory "inventory" "bag" "stuff" "items" "weapons" "potions" "armour" "armor")

;; Triggering an item
(group: trigger "use" "trigger" "activate" "operate" "equip" "hold" "put on")

;; Speaking with characters
(group: dialogue "speak with" "talk to" "speak" "talk" "converse" "ask")

;; Beginning an encounter
(group: encounter "attack" "fight" "assassinate" "assult" "kill" "murder")

;; Encounter choices
(group: select-one "1" "one" "first")
(group: select-two "2" "two" "second")
(group: select-three "3" "three" "third")
(group: select-four "4" "four" "fourth")

;; Filler words
(filler: "a" "i" "the" "")
"#;

/// Builds the standard phrase table.
#[must_use]
pub fn standard_table() -> PhraseTable {
    PhraseTable::from_static(GROUPS)
}

/// Builds the standard filler set.
#[must_use]
pub fn standard_fillers() -> FillerSet {
    FillerSet::from_words(FILLERS.iter().copied())
}
