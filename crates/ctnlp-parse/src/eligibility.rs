//! Eligibility section interpretation.
//!
//! A criteria block is expected to hold an inclusion header, the inclusion
//! list, then optionally an exclusion header and the exclusion list. The
//! headers are located by literal search in priority order (see
//! [`CriteriaHeaders`]); each half is then handed to [`segment_criteria`].

use ctnlp_model::{EligibilityResult, ParsedCriteria};
use tracing::debug;

use crate::age::normalize_age;
use crate::criteria::segment_criteria;
use crate::headers::CriteriaHeaders;
use crate::vocabulary::{normalize_gender, normalize_health_status};

/// Raw text of a trial's eligibility section, as read from the registry file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityBlock<'a> {
    pub criteria: &'a str,
    pub gender: Option<&'a str>,
    pub minimum_age: Option<&'a str>,
    pub maximum_age: Option<&'a str>,
    pub healthy_volunteers: Option<&'a str>,
}

/// Result of cutting a text on the first header of a priority list that occurs in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSplit<'a> {
    /// None of the headers occur; holds the whole text.
    Missing(&'a str),
    /// The selected header occurs exactly once.
    Split { before: &'a str, after: &'a str },
    /// The selected header occurs more than once, so the cut is ambiguous.
    Repeated { occurrences: usize },
}

/// Cuts `text` on the first entry of `headers` that occurs in it.
///
/// Priority comes from the order of `headers`, not from the position of the
/// match in `text`.
pub fn split_on_header<'a>(text: &'a str, headers: &[String]) -> HeaderSplit<'a> {
    let Some(header) = headers
        .iter()
        .find(|header| !header.is_empty() && text.contains(header.as_str()))
    else {
        return HeaderSplit::Missing(text);
    };

    let occurrences = text.matches(header.as_str()).count();
    match text.split_once(header.as_str()) {
        Some((before, after)) if occurrences == 1 => HeaderSplit::Split { before, after },
        _ => HeaderSplit::Repeated { occurrences },
    }
}

/// Splits criteria blocks and normalizes the sibling eligibility fields.
#[derive(Debug, Clone, Default)]
pub struct EligibilityInterpreter {
    headers: CriteriaHeaders,
}

impl EligibilityInterpreter {
    pub fn new(headers: CriteriaHeaders) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &CriteriaHeaders {
        &self.headers
    }

    /// Extracts inclusion and exclusion statements from a criteria block.
    ///
    /// Returns `None` when the block is not in the expected shape: the
    /// inclusion header is missing or repeated, the exclusion header is
    /// repeated, or no inclusion statement survives segmentation.
    pub fn parse_criteria(&self, criteria: &str) -> Option<ParsedCriteria> {
        let remainder = match split_on_header(criteria, &self.headers.inclusion) {
            HeaderSplit::Split { before, after } => {
                if !self.headers.is_expected_preamble(before) {
                    debug!(
                        preamble = before.trim(),
                        "skipping unparsed text before inclusion header"
                    );
                }
                after
            }
            HeaderSplit::Missing(_) => {
                debug!("no inclusion header in criteria");
                return None;
            }
            HeaderSplit::Repeated { occurrences } => {
                debug!(occurrences, "inclusion header is repeated");
                return None;
            }
        };

        let (inclusion_text, exclusion_text) =
            match split_on_header(remainder, &self.headers.exclusion) {
                HeaderSplit::Split { before, after } => (before, after),
                HeaderSplit::Missing(whole) => (whole, ""),
                HeaderSplit::Repeated { occurrences } => {
                    debug!(occurrences, "exclusion header is repeated");
                    return None;
                }
            };

        let inclusion = segment_criteria(inclusion_text);
        if inclusion.is_empty() {
            debug!("criteria block has no inclusion statements");
            return None;
        }
        let exclusion = segment_criteria(exclusion_text);

        Some(ParsedCriteria {
            inclusion,
            exclusion,
        })
    }

    /// Interprets an eligibility section whose criteria text parses.
    ///
    /// Returns `None` when [`parse_criteria`](Self::parse_criteria) does.
    pub fn interpret(&self, block: &EligibilityBlock<'_>) -> Option<EligibilityResult> {
        let criteria = self.parse_criteria(block.criteria)?;
        Some(EligibilityResult {
            inclusion: criteria.inclusion,
            exclusion: criteria.exclusion,
            ..normalize_fields(block)
        })
    }

    /// Interprets an eligibility section, falling back to empty criteria.
    ///
    /// The sibling fields are normalized whether or not the criteria text
    /// parses. A trial without an eligibility section gets
    /// [`EligibilityResult::default`].
    pub fn interpret_or_default(&self, block: Option<&EligibilityBlock<'_>>) -> EligibilityResult {
        let Some(block) = block else {
            return EligibilityResult::default();
        };
        self.interpret(block)
            .unwrap_or_else(|| normalize_fields(block))
    }
}

fn normalize_fields(block: &EligibilityBlock<'_>) -> EligibilityResult {
    EligibilityResult {
        gender: normalize_gender(block.gender),
        minimum_age: normalize_age(block.minimum_age.unwrap_or_default()),
        maximum_age: normalize_age(block.maximum_age.unwrap_or_default()),
        accepts_healthy_volunteers: normalize_health_status(block.healthy_volunteers),
        inclusion: Vec::new(),
        exclusion: Vec::new(),
    }
}
