//! Assembly of [`ClinicalTrial`] records from ClinicalTrials.gov study XML.

use std::path::Path;

use ctnlp_model::ClinicalTrial;
use ctnlp_parse::{EligibilityBlock, EligibilityInterpreter, extract_outcomes};

use crate::error::{IngestError, Result};
use crate::xml::{XmlElement, read_document};

/// Placeholder `text` for a record with no titles, summaries or criteria.
pub const EMPTY_TEXT_PLACEHOLDER: &str = "empty";

/// Reads the eligibility section of a study, if it has one.
///
/// The criteria text lives in `eligibility/criteria/textblock`; a missing
/// criteria element reads as empty text.
pub fn eligibility_block(root: &XmlElement) -> Option<EligibilityBlock<'_>> {
    let eligibility = root.child("eligibility")?;
    Some(EligibilityBlock {
        criteria: eligibility
            .find("criteria/textblock")
            .map(XmlElement::text)
            .unwrap_or_default(),
        gender: eligibility.find_text("gender"),
        minimum_age: eligibility.find_text("minimum_age"),
        maximum_age: eligibility.find_text("maximum_age"),
        healthy_volunteers: eligibility.find_text("healthy_volunteers"),
    })
}

/// Builds a trial record from a parsed `clinical_study` root element.
pub fn parse_clinical_trial(
    root: &XmlElement,
    interpreter: &EligibilityInterpreter,
) -> Result<ClinicalTrial> {
    let id_info = root
        .child("id_info")
        .ok_or_else(|| IngestError::MissingElement {
            element: "id_info".to_string(),
        })?;

    let brief_title = owned_text(root, "brief_title");
    let official_title = owned_text(root, "official_title");
    let brief_summary = owned_text(root, "brief_summary/textblock");
    let detailed_description = owned_text(root, "detailed_description/textblock");

    let block = eligibility_block(root);
    let criteria = block.map(|b| b.criteria.to_string()).unwrap_or_default();
    let eligibility = interpreter.interpret_or_default(block.as_ref());

    let outcomes = extract_outcomes(
        root.children_named("primary_outcome"),
        root.children_named("secondary_outcome"),
    );

    let text = compose_text(
        &brief_title,
        &official_title,
        &brief_summary,
        &detailed_description,
        &criteria,
    );

    Ok(ClinicalTrial {
        org_study_id: id_info.find_text("org_study_id").map(str::to_string),
        nct_id: id_info.find_text("nct_id").map(str::to_string),
        brief_title,
        official_title,
        brief_summary,
        detailed_description,
        study_type: root.find_text("study_type").map(str::to_string),
        conditions: root
            .children_named("condition")
            .map(|condition| condition.text().to_string())
            .collect(),
        interventions: root
            .children_named("intervention")
            .filter_map(|intervention| intervention.find_text("intervention_name"))
            .map(str::to_string)
            .collect(),
        criteria,
        inclusion: eligibility.inclusion,
        exclusion: eligibility.exclusion,
        gender: eligibility.gender,
        minimum_age: eligibility.minimum_age,
        maximum_age: eligibility.maximum_age,
        accepts_healthy_volunteers: eligibility.accepts_healthy_volunteers,
        text,
        primary_outcomes: outcomes.primary,
        secondary_outcomes: outcomes.secondary,
        text_preprocessed: None,
    })
}

/// Reads a single study file into a trial record.
pub fn load_clinical_trial(path: &Path, interpreter: &EligibilityInterpreter) -> Result<ClinicalTrial> {
    let root = read_document(path)?;
    parse_clinical_trial(&root, interpreter).map_err(|e| e.in_file(path))
}

/// Joins the free-text fields into the searchable `text` of a record.
///
/// Layout: `"{brief_title} {official_title}\n{brief_summary} {detailed_description}\n{criteria}"`,
/// each part trimmed.
pub fn compose_text(
    brief_title: &str,
    official_title: &str,
    brief_summary: &str,
    detailed_description: &str,
    criteria: &str,
) -> String {
    let text = format!(
        "{} {}\n{} {}\n{}",
        brief_title.trim(),
        official_title.trim(),
        brief_summary.trim(),
        detailed_description.trim(),
        criteria.trim()
    );
    if text.trim().is_empty() {
        EMPTY_TEXT_PLACEHOLDER.to_string()
    } else {
        text
    }
}

fn owned_text(root: &XmlElement, path: &str) -> String {
    root.find_text(path).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn compose_text_joins_trimmed_fields() {
        assert_eq!(
            compose_text(" Title ", "", "\n Summary \n", "Details", "  criteria  "),
            "Title \nSummary Details\ncriteria"
        );
    }

    #[test]
    fn compose_text_uses_placeholder_when_blank() {
        assert_eq!(compose_text("", " ", "", "\n", ""), EMPTY_TEXT_PLACEHOLDER);
    }

    #[test]
    fn missing_id_info_is_an_error() {
        let root = parse_document("<clinical_study><brief_title>T</brief_title></clinical_study>")
            .expect("parse");
        let err = parse_clinical_trial(&root, &EligibilityInterpreter::default()).unwrap_err();
        assert!(matches!(err, IngestError::MissingElement { ref element } if element == "id_info"));
    }

    #[test]
    fn missing_eligibility_uses_defaults() {
        let root = parse_document(
            "<clinical_study><id_info><nct_id>NCT1</nct_id></id_info></clinical_study>",
        )
        .expect("parse");
        let trial = parse_clinical_trial(&root, &EligibilityInterpreter::default()).expect("trial");
        assert_eq!(trial.nct_id.as_deref(), Some("NCT1"));
        assert_eq!(trial.org_study_id, None);
        assert_eq!(trial.criteria, "");
        assert!(trial.accepts_healthy_volunteers);
        assert!(trial.inclusion.is_empty());
        assert_eq!(trial.text, EMPTY_TEXT_PLACEHOLDER);
        assert!(trial.primary_outcomes.is_empty());
    }

    #[test]
    fn eligibility_without_criteria_reads_empty_text() {
        let root = parse_document(
            "<clinical_study><eligibility><gender>Male</gender></eligibility></clinical_study>",
        )
        .expect("parse");
        let block = eligibility_block(&root).expect("eligibility present");
        assert_eq!(block.criteria, "");
        assert_eq!(block.gender, Some("Male"));
        assert_eq!(block.minimum_age, None);
    }
}
