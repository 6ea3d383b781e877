//! Domain Errors
//!
//! Failures that end a submission without a server verdict.

use thiserror::Error;

use super::value_objects::ElementId;

/// Submission errors.
///
/// `Display` is the bare message; the status element prefixes it with
/// `Error: `.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Element not found: {0}")]
    MissingElement(ElementId),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(SubmitError::Transport("network down".into()).to_string(), "network down");
        assert_eq!(
            SubmitError::MissingElement(ElementId::Prompt).to_string(),
            "Element not found: prompt"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let submit: SubmitError = err.into();
        assert!(matches!(submit, SubmitError::Decode(_)));
    }
}
