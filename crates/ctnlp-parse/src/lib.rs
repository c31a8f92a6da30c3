//! Heuristic parsing of clinical trial registry text.
//!
//! Everything here is a pure function of already-extracted text fields:
//! - [`normalize_age`] converts `18 Years`, `6 Months`, ... to years.
//! - [`normalize_gender`] and [`normalize_health_status`] map registry vocabularies.
//! - [`segment_criteria`] splits a criteria block into statements.
//! - [`EligibilityInterpreter`] finds the inclusion/exclusion boundary.
//! - [`extract_outcomes`] collects outcome measures.
//!
//! Unparseable input is never an error. It shows up as `None` or an empty
//! list, with a `tracing` event for diagnostics.

pub mod age;
pub mod criteria;
pub mod eligibility;
pub mod headers;
pub mod outcomes;
pub mod vocabulary;

pub use age::{AGE_UNITS, IGNORED_AGE_VALUES, normalize_age};
pub use criteria::segment_criteria;
pub use eligibility::{EligibilityBlock, EligibilityInterpreter, HeaderSplit, split_on_header};
pub use headers::{
    CriteriaHeaders, DEFAULT_EXCLUSION_HEADERS, DEFAULT_EXPECTED_PREAMBLES,
    DEFAULT_INCLUSION_HEADERS,
};
pub use outcomes::{OutcomeBlock, extract_outcomes};
pub use vocabulary::{
    DEFAULT_ACCEPTS_HEALTHY_VOLUNTEERS, DEFAULT_GENDER, normalize_gender, normalize_health_status,
};
