//! Integration tests for the wayfarer_parser crate.
//!
//! Tests for the input pipeline:
//! - Tokenization and filler removal
//! - Priority-ordered phrase matching
//! - Action dispatch and responses
//! - Phrasebook loading

mod dispatch_tests;
mod matcher_tests;
mod phrasebook_tests;
mod tokenizer_tests;
