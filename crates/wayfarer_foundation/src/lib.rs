//! Core types shared by every Wayfarer layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Result`] - Result alias used throughout the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
