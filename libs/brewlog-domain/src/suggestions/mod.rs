//! Brewing suggestions module
//!
//! Looks up brewing advice for a coffee from its varietal and process.
//! Advice starts from a baseline record; the first matching varietal rule
//! is overlaid on it, then the first matching process rule, so process
//! advice wins where both set the same field.

mod catalog;
mod error;
mod ratio;
mod record;
pub mod rules;

use tracing::debug;

pub use catalog::{PROCESSES, VARIETALS};
pub use error::SuggestionError;
pub use ratio::{parse_brew_ratio, SuggestedDefaults, REFERENCE_DOSE_G};
pub use record::{BrewingSuggestion, SuggestionPatch};

/// Brewing advice for a varietal and process
///
/// Matching ignores case. Unknown or empty inputs leave the baseline
/// advice in place.
pub fn suggest(varietal: &str, process: &str) -> BrewingSuggestion {
    let mut suggestion = BrewingSuggestion::default();

    let varietal_rule = VARIETALS.first_match(&varietal.to_lowercase());
    if let Some(rule) = varietal_rule {
        rule.apply(&mut suggestion);
    }

    let process_rule = PROCESSES.first_match(&process.to_lowercase());
    if let Some(rule) = process_rule {
        rule.apply(&mut suggestion);
    }

    debug!(
        varietal_rule = varietal_rule.map(|rule| rule.name),
        process_rule = process_rule.map(|rule| rule.name),
        "Looked up brewing suggestion"
    );

    suggestion
}
