//! Terminal output sink.

use std::io::{self, Write};

use log::warn;
use wayfarer_parser::OutputSink;

/// Prints each message on its own line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView {
    color: bool,
}

impl ConsoleView {
    /// Creates a plain console view.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: false }
    }

    /// Renders messages in bold.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl OutputSink for ConsoleView {
    fn send_text(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        let result = if self.color {
            writeln!(stdout, "\x1b[1m{message}\x1b[0m")
        } else {
            writeln!(stdout, "{message}")
        };
        if let Err(e) = result.and_then(|()| stdout.flush()) {
            warn!("failed to write to console: {e}");
        }
    }
}
