//! Game state consulted by the interpreter.

/// Per-session game state that outlives a single input line.
///
/// The interpreter only reads it; encounters begin and end through game
/// logic outside the parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    in_encounter: bool,
}

impl GameState {
    /// Creates a state outside of any encounter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_encounter: false,
        }
    }

    /// Whether selection phrases ("one", "second", ...) are encounter choices.
    #[must_use]
    pub const fn in_encounter(&self) -> bool {
        self.in_encounter
    }

    /// Marks the start of an encounter.
    pub fn enter_encounter(&mut self) {
        self.in_encounter = true;
    }

    /// Marks the end of an encounter.
    pub fn leave_encounter(&mut self) {
        self.in_encounter = false;
    }
}
