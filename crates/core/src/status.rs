//! Status sink: receives the one-line status text (line count, pause, game over).

/// Receiver of status text updates
pub trait StatusSink {
    fn set_status(&mut self, text: &str);
}

/// Default sink keeping the latest text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    updates: u32,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of updates received so far
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl StatusSink for StatusLine {
    fn set_status(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.updates = self.updates.wrapping_add(1);
    }
}

impl StatusSink for String {
    fn set_status(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for Box<S> {
    fn set_status(&mut self, text: &str) {
        (**self).set_status(text);
    }
}
