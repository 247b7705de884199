//! Session, REPL, and CLI for Wayfarer.
//!
//! This crate provides:
//! - [`Session`] - Game state plus the interpreter, feeding one view
//! - [`Repl`] - Interactive read-process-print loop
//! - [`ConsoleView`] - Output sink that prints to the terminal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;
pub mod view;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
pub use view::ConsoleView;
