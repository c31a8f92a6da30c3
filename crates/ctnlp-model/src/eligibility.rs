//! Outputs of eligibility interpretation and outcome extraction.

use serde::{Deserialize, Serialize};

use crate::enums::Gender;

/// Inclusion and exclusion statements split out of a criteria block.
///
/// `inclusion` is never empty: a block that yields no inclusion statement
/// is reported as unparsed instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCriteria {
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
}

/// Normalized eligibility section of a trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub gender: Gender,
    /// Minimum age in years.
    pub minimum_age: Option<f64>,
    /// Maximum age in years.
    pub maximum_age: Option<f64>,
    pub accepts_healthy_volunteers: bool,
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
}

impl Default for EligibilityResult {
    /// Values used when a trial has no eligibility section at all.
    fn default() -> Self {
        Self {
            gender: Gender::Unknown,
            minimum_age: None,
            maximum_age: None,
            accepts_healthy_volunteers: true,
            inclusion: Vec::new(),
            exclusion: Vec::new(),
        }
    }
}

impl EligibilityResult {
    /// True when inclusion/exclusion statements were recovered from the criteria text.
    pub fn has_criteria(&self) -> bool {
        !self.inclusion.is_empty()
    }
}

/// Outcome measures in document order.
///
/// One entry per outcome block; a block without a `measure` child is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcomes {
    pub primary: Vec<Option<String>>,
    pub secondary: Vec<Option<String>>,
}
