//! Brew log statistics

use serde::Serialize;

use super::BrewLogEntry;

/// Summary of a brew log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrewStats {
    pub total_brews: usize,
    /// `None` when no entry has a usable value
    pub average_extraction_yield: Option<f64>,
    pub average_tds: Option<f64>,
    /// Name and brew count
    pub most_used_coffee: Option<(String, usize)>,
    pub most_used_brewer: Option<(String, usize)>,
}

impl BrewStats {
    /// Compute statistics over a set of entries
    ///
    /// Non-finite metrics are left out of the averages. Ties for "most used"
    /// go to the name that appears first.
    pub fn from_entries(entries: &[BrewLogEntry]) -> Self {
        Self {
            total_brews: entries.len(),
            average_extraction_yield: mean(entries.iter().map(|e| e.extraction_yield)),
            average_tds: mean(entries.iter().map(|e| e.tds_percent)),
            most_used_coffee: most_common(entries.iter().map(|e| e.coffee_name.as_str())),
            most_used_brewer: most_common(entries.iter().filter_map(|e| e.brewer.as_deref())),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

fn most_common<'a>(names: impl Iterator<Item = &'a str>) -> Option<(String, usize)> {
    // Vec keeps first-seen order for tie breaking
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for name in names.filter(|n| !n.trim().is_empty()) {
        match counts.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (name, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((name, count)),
        })
        .map(|(name, count)| (name.to_string(), count))
}
