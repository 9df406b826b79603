//! Ordered keyword rules
//!
//! A rule matches lowercased free text by substring. Tables are scanned top
//! to bottom and the first matching rule wins, so more specific rules must
//! come before the general ones they refine.

use super::{BrewingSuggestion, SuggestionPatch};

/// Substring condition over lowercased text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    /// Every group must have at least one of its keywords present
    pub requires: &'static [&'static [&'static str]],
    /// None of these keywords may be present
    pub none_of: &'static [&'static str],
}

impl Predicate {
    /// Check the predicate against already lowercased text
    pub fn matches(&self, text: &str) -> bool {
        self.requires
            .iter()
            .all(|group| group.iter().any(|keyword| text.contains(keyword)))
            && !self.none_of.iter().any(|keyword| text.contains(keyword))
    }
}

/// A named predicate with the patches it applies, in order
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub patches: &'static [SuggestionPatch],
}

impl Rule {
    /// Overlay this rule's patches onto a suggestion
    pub fn apply(&self, suggestion: &mut BrewingSuggestion) {
        for patch in self.patches {
            patch.apply(suggestion);
        }
    }
}

/// Rules scanned in order, first match wins
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl RuleTable {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// First rule matching the lowercased text
    pub fn first_match(&self, text: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.predicate.matches(text))
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}
