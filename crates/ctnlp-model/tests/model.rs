//! Tests for ctnlp-model types.

use ctnlp_model::{ClinicalTrial, Gender, InputType, InputTypeError, Patient};

fn sample_trial() -> ClinicalTrial {
    ClinicalTrial {
        org_study_id: Some("NCRR-M01RR01070-0506".to_string()),
        nct_id: Some("NCT00000102".to_string()),
        brief_title: "Congenital Adrenal Hyperplasia".to_string(),
        official_title: String::new(),
        brief_summary: String::new(),
        detailed_description: String::new(),
        study_type: Some("Interventional".to_string()),
        conditions: vec!["Congenital Adrenal Hyperplasia".to_string()],
        interventions: vec!["Nifedipine".to_string()],
        criteria: String::new(),
        inclusion: vec!["Males and females".to_string()],
        exclusion: vec![],
        gender: Gender::All,
        minimum_age: Some(14.0),
        maximum_age: Some(35.0),
        accepts_healthy_volunteers: false,
        text: "empty".to_string(),
        primary_outcomes: vec![],
        secondary_outcomes: vec![Some("Toxicities".to_string()), None],
        text_preprocessed: None,
    }
}

#[test]
fn trial_serializes_gender_lowercase() {
    let json = serde_json::to_value(sample_trial()).expect("serialize trial");
    assert_eq!(json["gender"], "all");
    assert_eq!(json["secondary_outcomes"][1], serde_json::Value::Null);
    assert!(json.get("text_preprocessed").is_none());
}

#[test]
fn trial_round_trips_through_json() {
    let trial = sample_trial();
    let json = serde_json::to_string(&trial).expect("serialize trial");
    let round: ClinicalTrial = serde_json::from_str(&json).expect("deserialize trial");
    assert_eq!(round, trial);
}

#[test]
fn display_id_prefers_nct_id() {
    let mut trial = sample_trial();
    assert_eq!(trial.display_id(), "NCT00000102");
    trial.nct_id = None;
    assert_eq!(trial.display_id(), "NCRR-M01RR01070-0506");
    trial.org_study_id = None;
    assert_eq!(trial.display_id(), "<unknown>");
}

#[test]
fn input_type_error_names_value() {
    let err = "XML".parse::<InputType>().unwrap_err();
    assert_eq!(
        err,
        InputTypeError::Unsupported {
            value: "XML".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "input_type can be only 'TREC' or 'CSIRO', got 'XML'"
    );
}

#[test]
fn patient_serializes_with_defaults() {
    let json = serde_json::to_value(Patient::new(1, "desc")).expect("serialize patient");
    assert_eq!(json["patient_id"], 1);
    assert_eq!(json["gender"], "unknown");
    assert_eq!(json["is_smoker"], serde_json::Value::Null);
}
