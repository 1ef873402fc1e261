//! The host-native error value produced by translation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A foreign-interpreter exception surfaced as a host error.
///
/// Carries the foreign exception class's name and, when the raised exception
/// had a value (instance) attached, the value rendered through its own
/// `__str__` protocol. Immutable after construction and free of foreign
/// references: every handle touched during translation is released before
/// this value is built, so it can outlive the interpreter session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignError {
    type_name: String,
    message: Option<String>,
}

impl ForeignError {
    /// Creates an error from a foreign exception class name and optional
    /// rendered message.
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message,
        }
    }

    /// The foreign exception class's name, e.g. `"ValueError"`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The rendered exception value, if one was carried.
    ///
    /// `None` when the foreign code raised a bare exception class with no
    /// instance attached.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// One-line summary: `"TypeName: message"`, or just `"TypeName"` when no
    /// message is present.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.type_name),
            None => f.write_str(&self.type_name),
        }
    }
}

impl std::error::Error for ForeignError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_type_and_message() {
        let err = ForeignError::new("ValueError", Some("bad input".to_string()));
        assert_eq!(err.to_string(), "ValueError: bad input");
    }

    #[test]
    fn display_is_bare_type_without_message() {
        let err = ForeignError::new("StopIteration", None);
        assert_eq!(err.to_string(), "StopIteration");
    }

    #[test]
    fn accessors_expose_parts() {
        let err = ForeignError::new("KeyError", Some("'missing'".to_string()));
        assert_eq!(err.type_name(), "KeyError");
        assert_eq!(err.message(), Some("'missing'"));
        assert_eq!(err.summary(), "KeyError: 'missing'");
    }

    #[test]
    fn empty_message_is_still_a_message() {
        // An exception instance whose __str__ returns "" keeps the separator,
        // matching how the foreign interpreter itself distinguishes the cases.
        let err = ForeignError::new("RuntimeError", Some(String::new()));
        assert_eq!(err.to_string(), "RuntimeError: ");
    }
}
