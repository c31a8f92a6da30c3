use serde::{Deserialize, Serialize};

use crate::enums::Gender;

/// A patient description from a TREC or CSIRO topic file.
///
/// Only `patient_id` and `description` come from the topic file. The other
/// fields are slots for downstream annotators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i64,
    pub description: String,
    pub conditions: Option<Vec<String>>,
    pub current_medical_history: Option<String>,
    pub past_medical_history: Option<String>,
    pub family_medical_history: Option<String>,
    pub gender: Gender,
    /// Age in years.
    pub age: Option<f64>,
    pub is_healthy: Option<bool>,
    pub is_smoker: Option<bool>,
    pub is_drinker: Option<bool>,
}

impl Patient {
    pub fn new(patient_id: i64, description: impl Into<String>) -> Self {
        Self {
            patient_id,
            description: description.into(),
            conditions: None,
            current_medical_history: None,
            past_medical_history: None,
            family_medical_history: None,
            gender: Gender::Unknown,
            age: None,
            is_healthy: None,
            is_smoker: None,
            is_drinker: None,
        }
    }
}
