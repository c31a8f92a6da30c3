//! Patient topic files (TREC Clinical Trials track and CSIRO layouts).
//!
//! Both layouts are a root element with one child per topic, each carrying
//! an integer `number` attribute. TREC topics hold the description as
//! their own text; CSIRO topics hold it in their first child element.

use std::path::Path;

use ctnlp_model::{InputType, Patient};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::xml::{XmlElement, read_document};

/// Builds one patient per topic element of `root`.
pub fn parse_patients(root: &XmlElement, input_type: InputType) -> Result<Vec<Patient>> {
    root.children()
        .iter()
        .map(|topic| parse_topic(topic, input_type))
        .collect()
}

/// Loads all patients from a topic file.
///
/// `input_type` is the textual layout selector, `"TREC"` or `"CSIRO"`. Any
/// other value is rejected before the file is opened.
pub fn load_patients_from_xml(path: &Path, input_type: &str) -> Result<Vec<Patient>> {
    let input_type: InputType = input_type.parse()?;
    let root = read_document(path)?;
    let patients = parse_patients(&root, input_type).map_err(|e| e.in_file(path))?;
    debug!(
        path = %path.display(),
        %input_type,
        patient_count = patients.len(),
        "loaded patient topics"
    );
    Ok(patients)
}

fn parse_topic(topic: &XmlElement, input_type: InputType) -> Result<Patient> {
    let number = topic.attribute("number").unwrap_or_default();
    let patient_id = number
        .trim()
        .parse::<i64>()
        .map_err(|_| IngestError::InvalidPatientNumber {
            value: number.to_string(),
        })?;

    let description = match input_type {
        InputType::Trec => topic.text(),
        InputType::Csiro => topic
            .first_child()
            .map(XmlElement::text)
            .ok_or(IngestError::MissingDescription { patient_id })?,
    };

    Ok(Patient::new(patient_id, description.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn trec_topic_uses_own_text() {
        let root = parse_document(
            r#"<topics task="2022 TREC Clinical Trials"><topic number="3">
  A 19-year-old male came to clinic.
</topic></topics>"#,
        )
        .expect("parse");
        let patients = parse_patients(&root, InputType::Trec).expect("patients");
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].patient_id, 3);
        assert_eq!(patients[0].description, "A 19-year-old male came to clinic.");
    }

    #[test]
    fn csiro_topic_uses_first_child() {
        let root = parse_document(
            r#"<topics><topic number="12"><description> Patient with asthma. </description><age>40</age></topic></topics>"#,
        )
        .expect("parse");
        let patients = parse_patients(&root, InputType::Csiro).expect("patients");
        assert_eq!(patients[0].patient_id, 12);
        assert_eq!(patients[0].description, "Patient with asthma.");
    }

    #[test]
    fn csiro_topic_without_child_is_an_error() {
        let root = parse_document(r#"<topics><topic number="5">text</topic></topics>"#).expect("parse");
        assert!(matches!(
            parse_patients(&root, InputType::Csiro),
            Err(IngestError::MissingDescription { patient_id: 5 })
        ));
    }

    #[test]
    fn non_integer_number_is_an_error() {
        let root = parse_document(r#"<topics><topic number="one">text</topic></topics>"#).expect("parse");
        assert!(matches!(
            parse_patients(&root, InputType::Trec),
            Err(IngestError::InvalidPatientNumber { ref value }) if value == "one"
        ));
    }

    #[test]
    fn unsupported_input_type_is_rejected_before_reading() {
        let err = load_patients_from_xml(Path::new("/does/not/exist.xml"), "JSON").unwrap_err();
        assert!(matches!(err, IngestError::InputType(_)));
    }
}
