//! Errors for brewing suggestions

use thiserror::Error;

/// Errors that can occur while turning advice into brew settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// The advised brew ratio has no number we can read
    #[error("Could not parse brew ratio: {0}")]
    UnparseableRatio(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SuggestionError::UnparseableRatio("strong".to_string());
        assert_eq!(err.to_string(), "Could not parse brew ratio: strong");
    }
}
