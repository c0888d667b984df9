//! Append-only text sink for matcher descriptions and mismatch reports.

use std::fmt;

/// Accumulates human-readable text describing an expectation or a mismatch.
///
/// Text can only be appended; nothing written is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn append_value(&mut self, value: impl fmt::Display) -> &mut Self {
        self.text.push_str(&value.to_string());
        self
    }

    /// ## Summary
    /// Appends `values` between `start` and `end`, separated by `separator`.
    pub fn append_list<I>(&mut self, start: &str, separator: &str, end: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.text.push_str(start);
        for (index, value) in values.into_iter().enumerate() {
            if index > 0 {
                self.text.push_str(separator);
            }
            self.text.push_str(&value.to_string());
        }
        self.text.push_str(end);
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
