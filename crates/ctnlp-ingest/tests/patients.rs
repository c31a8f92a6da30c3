//! Tests for patient topic loading.

use std::path::{Path, PathBuf};

use ctnlp_ingest::{IngestError, load_patients_from_xml};
use ctnlp_model::Gender;

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn loads_trec_topics() {
    let patients = load_patients_from_xml(&data_path("trec_topics.xml"), "TREC").expect("load");

    assert_eq!(patients.len(), 3);
    assert_eq!(&patients[0].description[..13], "A 19-year-old");
    assert_eq!(patients[1].patient_id, 2);
    assert_eq!(
        patients[2].description,
        "A 51-year-old man presents with exertional chest pain & shortness of breath."
    );
    assert!(patients.iter().all(|p| p.gender == Gender::Unknown));
}

#[test]
fn loads_csiro_topics() {
    let patients = load_patients_from_xml(&data_path("csiro_topics.xml"), "CSIRO").expect("load");

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].patient_id, 20141);
    assert_eq!(
        patients[0].description,
        "58-year-old woman with hypertension and obesity presents with exercise-related episodic chest pain."
    );
    assert_eq!(
        patients[1].description,
        "8-year-old boy with 2 days of loose stools, fever, and cough."
    );
}

#[test]
fn csiro_file_read_as_trec_gives_empty_descriptions() {
    let patients = load_patients_from_xml(&data_path("csiro_topics.xml"), "TREC").expect("load");
    assert!(patients.iter().all(|p| p.description.is_empty()));
}

#[test]
fn rejects_unknown_input_type() {
    let err = load_patients_from_xml(&data_path("trec_topics.xml"), "trec").unwrap_err();
    assert!(matches!(err, IngestError::InputType(_)));
    assert_eq!(
        err.to_string(),
        "input_type can be only 'TREC' or 'CSIRO', got 'trec'"
    );
}
