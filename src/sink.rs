//! Destinations for the stamped text.

use std::collections::BTreeMap;

/// Error type for display sink writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// No element carries the requested id.
    #[error("Display target not found: {0}")]
    TargetNotFound(String),
}

/// Capability to replace the visible text of an element identified by id.
pub trait DisplaySink {
    /// Replaces the text of `target` with `text`.
    ///
    /// # Errors
    /// Returns `SinkError::TargetNotFound` if no element has the id `target`.
    fn set_text(&mut self, target: &str, text: &str) -> Result<(), SinkError>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn set_text(&mut self, target: &str, text: &str) -> Result<(), SinkError> {
        (**self).set_text(target, text)
    }
}

/// In-memory page model: element ids mapped to their current text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Document::insert_element`]
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.insert_element(id);
        self
    }

    /// Adds an empty element; an existing element keeps its text
    pub fn insert_element(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Returns the current text of the element, if it exists
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

impl DisplaySink for Document {
    fn set_text(&mut self, target: &str, text: &str) -> Result<(), SinkError> {
        let slot = self
            .elements
            .get_mut(target)
            .ok_or_else(|| SinkError::TargetNotFound(target.to_owned()))?;
        text.clone_into(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_replaces_content() {
        let mut doc = Document::new().with_element("currentDate");
        doc.set_text("currentDate", "first").expect("element exists");
        doc.set_text("currentDate", "second").expect("element exists");
        assert_eq!(doc.text("currentDate"), Some("second"));
    }

    #[test]
    fn test_set_text_missing_target() {
        let mut doc = Document::new().with_element("other");
        let result = doc.set_text("currentDate", "05.03.2024");

        assert_eq!(result, Err(SinkError::TargetNotFound("currentDate".to_owned())));
        assert!(!doc.contains("currentDate"));
        assert_eq!(doc.text("other"), Some(""));
    }

    #[test]
    fn test_insert_element_keeps_existing_text() {
        let mut doc = Document::new().with_element("a");
        doc.set_text("a", "kept").expect("element exists");
        doc.insert_element("a");
        assert_eq!(doc.text("a"), Some("kept"));
    }

    #[test]
    fn test_error_message() {
        let err = SinkError::TargetNotFound("currentDate".to_owned());
        assert_eq!(err.to_string(), "Display target not found: currentDate");
    }
}
