//! Output sink capability.
//!
//! The interpreter never renders anything itself; it hands finished sentences
//! to whatever presentation layer implements [`OutputSink`].

/// Receives response text for the player.
pub trait OutputSink {
    /// Send one message to the player.
    fn send_text(&mut self, message: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn send_text(&mut self, message: &str) {
        (**self).send_text(message);
    }
}

/// Sink that collects messages in memory.
///
/// Useful for tests and for capturing output in batch runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferedOutput {
    messages: Vec<String>,
}

impl BufferedOutput {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Removes and returns all messages.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl OutputSink for BufferedOutput {
    fn send_text(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
