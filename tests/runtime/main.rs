//! Integration tests for the wayfarer_runtime crate.
//!
//! Tests for driving a game:
//! - Session state across turns
//! - The REPL with scripted input
//! - Batch scripts

mod script_tests;
mod session_tests;
