//! Phrase-matching input interpreter for text adventure games.
//!
//! This crate turns a line of player input like "look at the door" or
//! "I use a sword" into one of a small set of actions and emits the matching
//! response to an output sink.
//!
//! # Architecture
//!
//! ```text
//! "I use a sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["use", "sword"]      (lower-cased, fillers removed)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PHRASE          │  → group 3, start 0, window 1
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION          │  → Trigger, target "sword"
//! │ DISPATCH        │  → sink.send_text("You attacked sword!")
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to filtered words
//! - [`vocabulary`] - Phrase tables and filler sets
//! - [`phrasebook`] - Textual source format for vocabularies
//! - [`matcher`] - Priority-ordered phrase matching
//! - [`action`] - Actions and their dispatch
//! - [`output`] - Output sink capability
//! - [`state`] - Game state consulted by the interpreter
//! - [`interpreter`] - The `process(input)` entry point
//! - [`stdlib`] - Standard vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod interpreter;
pub mod matcher;
pub mod output;
pub mod phrasebook;
pub mod state;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;


// Re-export main types for convenience
pub use action::{Action, ActionDispatcher};
pub use interpreter::{Classification, InputInterpreter};
pub use matcher::{PhraseMatch, PhraseMatcher};
pub use output::{BufferedOutput, OutputSink};
pub use phrasebook::Phrasebook;
pub use state::GameState;
pub use tokenizer::InputTokenizer;
pub use vocabulary::{FillerSet, PhraseGroup, PhraseTable};
