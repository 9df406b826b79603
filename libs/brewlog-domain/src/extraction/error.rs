//! Errors for extraction calculations
//!
//! Every failure of the engine is reported as one of these three kinds.
//! None of them is fatal and none leaves anything to roll back.

use thiserror::Error;

use crate::extraction::entity::MeasurementField;

/// Errors that can occur while validating or computing an extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// A required reading is absent, or zero where zero is physically invalid
    #[error("Missing input: {0} is required")]
    MissingInput(MeasurementField),

    /// The readings are physically inconsistent
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A denominator evaluated to zero
    #[error("Division undefined: {0} is zero")]
    DivisionUndefined(&'static str),
}

impl ExtractionError {
    /// Create an invalid weights error with a reason
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        Self::InvalidWeights(reason.into())
    }
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = ExtractionError::MissingInput(MeasurementField::CoffeeDose);
        assert_eq!(err.to_string(), "Missing input: coffee dose is required");
    }

    #[test]
    fn test_invalid_weights_message() {
        let err = ExtractionError::invalid_weights("wet weight must be >= dry weight");
        assert_eq!(
            err.to_string(),
            "Invalid weights: wet weight must be >= dry weight"
        );
    }

    #[test]
    fn test_division_undefined_message() {
        let err = ExtractionError::DivisionUndefined("coffee water");
        assert_eq!(err.to_string(), "Division undefined: coffee water is zero");
    }
}
