//! Criteria parsing against a full registry criteria block.

use ctnlp_parse::{CriteriaHeaders, EligibilityInterpreter, segment_criteria};

const TEMOZOLOMIDE_CRITERIA: &str = include_str!("data/temozolomide_criteria.txt");

fn render(inclusion: &[String], exclusion: &[String]) -> String {
    let mut lines = vec!["INCLUSION".to_string()];
    lines.extend(inclusion.iter().cloned());
    lines.push("EXCLUSION".to_string());
    lines.extend(exclusion.iter().cloned());
    lines.join("\n")
}

#[test]
fn nested_bullets_are_flattened_in_order() {
    let interpreter = EligibilityInterpreter::default();
    let parsed = interpreter
        .parse_criteria(TEMOZOLOMIDE_CRITERIA)
        .expect("criteria parsed");

    assert_eq!(parsed.inclusion.len(), 24);
    assert_eq!(parsed.exclusion.len(), 13);
    assert_eq!(parsed.inclusion[5], "MRI-related criteria:");

    let rendered = render(&parsed.inclusion, &parsed.exclusion);
    insta::assert_snapshot!("temozolomide_criteria", rendered);
}

#[test]
fn no_statement_is_blank_or_a_bare_colon() {
    let interpreter = EligibilityInterpreter::default();
    let parsed = interpreter
        .parse_criteria(TEMOZOLOMIDE_CRITERIA)
        .expect("criteria parsed");

    for criterion in parsed.inclusion.iter().chain(parsed.exclusion.iter()) {
        assert!(!criterion.is_empty());
        assert_ne!(criterion, ":");
        assert_eq!(criterion.trim(), criterion);
        assert!(!criterion.contains("  "));
        assert!(!criterion.contains('\n'));
    }
}

#[test]
fn headers_loaded_from_json_extend_defaults() {
    let headers: CriteriaHeaders = serde_json::from_str(
        r#"{ "exclusion": ["Exclusion Criteria", "Non-inclusion criteria"] }"#,
    )
    .expect("parse headers");
    assert_eq!(headers.inclusion, CriteriaHeaders::default().inclusion);
    assert_eq!(headers.exclusion.len(), 2);

    let interpreter = EligibilityInterpreter::new(headers);
    let parsed = interpreter
        .parse_criteria("Inclusion Criteria: - Adults Non-inclusion criteria: - Minors")
        .expect("criteria parsed");
    assert_eq!(parsed.inclusion, vec!["Adults"]);
    assert_eq!(parsed.exclusion, vec!["Minors"]);
}

#[test]
fn carriage_returns_from_registry_exports_are_collapsed() {
    let text = "\r\n          -  Patients should be in functional class II, or III according to the criteria of the\r\n             ACR.\r\n\r\n";
    assert_eq!(
        segment_criteria(text),
        vec![
            "Patients should be in functional class II, or III according to the criteria of the ACR."
                .to_string()
        ]
    );
}
