//! Brew settings derived from advice

use serde::Serialize;

use super::{BrewingSuggestion, SuggestionError};

/// Dose used when turning an advised ratio into amounts, in grams
pub const REFERENCE_DOSE_G: f64 = 15.0;

/// Read the water part of a brew ratio
///
/// Accepts `1:16`, ranges such as `1:16.5 to 1:17` (the first bound is
/// used), `1 to 15.5` and a bare `16`.
pub fn parse_brew_ratio(text: &str) -> Option<f64> {
    let text = text.trim();

    let number = if let Some((_, rest)) = text.split_once(':') {
        rest.split_whitespace().next()?
    } else if let Some((_, rest)) = text.to_lowercase().split_once("to") {
        return rest.trim().parse().ok();
    } else {
        text
    };

    number.parse().ok()
}

/// Dose, water and grind to pre-fill a brew with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedDefaults {
    pub coffee_dose_g: f64,
    pub water_g: f64,
    /// First word of the advised grind, e.g. `Medium-fine`
    pub grind_size: String,
}

impl SuggestedDefaults {
    /// Derive brew settings from a suggestion
    ///
    /// # Errors
    ///
    /// Returns `SuggestionError::UnparseableRatio` if the advised ratio has
    /// no readable number
    pub fn from_suggestion(suggestion: &BrewingSuggestion) -> Result<Self, SuggestionError> {
        let ratio = parse_brew_ratio(&suggestion.brew_ratio)
            .ok_or_else(|| SuggestionError::UnparseableRatio(suggestion.brew_ratio.clone()))?;

        let grind_size = suggestion
            .grind_size
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            coffee_dose_g: REFERENCE_DOSE_G,
            water_g: REFERENCE_DOSE_G * ratio,
            grind_size,
        })
    }
}
