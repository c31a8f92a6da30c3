use serde::{Deserialize, Serialize};

use crate::enums::Gender;

/// The fields of a ClinicalTrials.gov study record used for matching.
///
/// `text` concatenates the titles, summaries and raw criteria.
/// `text_preprocessed` is reserved for a downstream tokenizer and is never
/// filled in by this workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalTrial {
    pub org_study_id: Option<String>,
    /// Primary identifier.
    pub nct_id: Option<String>,
    pub brief_title: String,
    pub official_title: String,
    pub brief_summary: String,
    pub detailed_description: String,
    pub study_type: Option<String>,
    pub conditions: Vec<String>,
    pub interventions: Vec<String>,
    /// Raw criteria text block.
    pub criteria: String,
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
    pub gender: Gender,
    pub minimum_age: Option<f64>,
    pub maximum_age: Option<f64>,
    pub accepts_healthy_volunteers: bool,
    pub text: String,
    pub primary_outcomes: Vec<Option<String>>,
    pub secondary_outcomes: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_preprocessed: Option<Vec<String>>,
}

impl ClinicalTrial {
    /// Label for logs and tables: the NCT id, falling back to the sponsor id.
    pub fn display_id(&self) -> &str {
        self.nct_id
            .as_deref()
            .or(self.org_study_id.as_deref())
            .unwrap_or("<unknown>")
    }

    pub fn has_criteria(&self) -> bool {
        !self.inclusion.is_empty()
    }
}
