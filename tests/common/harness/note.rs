//! Builder for test notes with sensible defaults.

/// Builder for creating test notes.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    body: String,
}

impl TestNote {
    /// Creates a new test note with the given title and an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
        }
    }

    /// Sets the body content.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the title.
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Returns the body content.
    pub fn get_body(&self) -> &str {
        &self.body
    }
}
