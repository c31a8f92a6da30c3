//! Section header vocabulary for criteria blocks.
//!
//! The lists are ordered: the first header found in a block wins. The
//! defaults follow how often each spelling occurs in registry exports,
//! including two misspellings that occur in real records.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INCLUSION_HEADERS: [&str; 4] = [
    "Inclusion Criteria",
    "Inclusion criteria",
    "Inclusive criteria",
    "INCLUSION CRITERIA",
];

pub const DEFAULT_EXCLUSION_HEADERS: [&str; 6] = [
    "Exclusion Criteria",
    "Exclusion criteria",
    "Exclusive criteria",
    "EXCLUSION CRITERIA",
    "ECLUSION CRITERIA",
    "EXCLUSION CRITIERIA",
];

/// Lowercased text that may precede the inclusion header without being reported.
pub const DEFAULT_EXPECTED_PREAMBLES: [&str; 4] = ["", "key", "-", "main"];

/// Header literals used to cut a criteria block into inclusion and exclusion text.
///
/// Deserializing fills missing fields from the defaults, so a configuration
/// file only needs the lists it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaHeaders {
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
    pub expected_preambles: Vec<String>,
}

impl Default for CriteriaHeaders {
    fn default() -> Self {
        Self {
            inclusion: to_owned_list(&DEFAULT_INCLUSION_HEADERS),
            exclusion: to_owned_list(&DEFAULT_EXCLUSION_HEADERS),
            expected_preambles: to_owned_list(&DEFAULT_EXPECTED_PREAMBLES),
        }
    }
}

impl CriteriaHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an inclusion header with the lowest priority.
    #[must_use]
    pub fn with_inclusion_header(mut self, header: impl Into<String>) -> Self {
        push_unique(&mut self.inclusion, header.into());
        self
    }

    /// Appends an exclusion header with the lowest priority.
    #[must_use]
    pub fn with_exclusion_header(mut self, header: impl Into<String>) -> Self {
        push_unique(&mut self.exclusion, header.into());
        self
    }

    /// Returns true if `preamble` is known filler before the inclusion header.
    pub fn is_expected_preamble(&self, preamble: &str) -> bool {
        let normalized = preamble.trim().to_lowercase();
        self.expected_preambles
            .iter()
            .any(|expected| *expected == normalized)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn push_unique(list: &mut Vec<String>, header: String) {
    if !header.is_empty() && !list.contains(&header) {
        list.push(header);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_priority_order() {
        let headers = CriteriaHeaders::default();
        assert_eq!(headers.inclusion[0], "Inclusion Criteria");
        assert_eq!(headers.inclusion.len(), 4);
        assert_eq!(headers.exclusion[4], "ECLUSION CRITERIA");
        assert_eq!(headers.exclusion[5], "EXCLUSION CRITIERIA");
    }

    #[test]
    fn builder_appends_at_lowest_priority() {
        let headers = CriteriaHeaders::new()
            .with_exclusion_header("EXLCUSION CRITERIA")
            .with_exclusion_header("Exclusion Criteria");
        assert_eq!(headers.exclusion.len(), 7);
        assert_eq!(headers.exclusion[6], "EXLCUSION CRITERIA");
    }

    #[test]
    fn preamble_check_is_case_insensitive() {
        let headers = CriteriaHeaders::default();
        assert!(headers.is_expected_preamble("  Key "));
        assert!(headers.is_expected_preamble("MAIN"));
        assert!(headers.is_expected_preamble("\n\t"));
        assert!(!headers.is_expected_preamble("Eligibility"));
    }
}
