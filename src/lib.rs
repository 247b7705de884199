//! Wayfarer - Phrase-matching input interpreter for text adventures
//!
//! This crate re-exports all layers of the Wayfarer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wayfarer_runtime    - Session, REPL, CLI
//! Layer 1: wayfarer_parser     - Tokenizer, phrase matcher, action dispatch
//! Layer 0: wayfarer_foundation - Error types
//! ```

pub use wayfarer_foundation as foundation;
pub use wayfarer_parser as parser;
pub use wayfarer_runtime as runtime;
