//! Gender and healthy-volunteer vocabularies.
//!
//! Both mappings are exact and case-sensitive. Registry exports use a fixed
//! set of strings, so anything else is treated as missing data.

use ctnlp_model::Gender;

/// Gender used when the field is empty or not one of the registry values.
pub const DEFAULT_GENDER: Gender = Gender::Unknown;

/// A trial that does not explicitly refuse healthy volunteers accepts them.
pub const DEFAULT_ACCEPTS_HEALTHY_VOLUNTEERS: bool = true;

pub fn normalize_gender(text: Option<&str>) -> Gender {
    match text {
        Some("All") => Gender::All,
        Some("Male") => Gender::Male,
        Some("Female") => Gender::Female,
        _ => DEFAULT_GENDER,
    }
}

/// Maps the `healthy_volunteers` field to "accepts healthy volunteers".
pub fn normalize_health_status(text: Option<&str>) -> bool {
    match text {
        Some("Accepts Healthy Volunteers") => true,
        Some("No") => false,
        _ => DEFAULT_ACCEPTS_HEALTHY_VOLUNTEERS,
    }
}
