pub mod eligibility;
pub mod enums;
pub mod error;
pub mod patient;
pub mod trial;

pub use eligibility::{EligibilityResult, Outcomes, ParsedCriteria};
pub use enums::{Gender, InputType};
pub use error::InputTypeError;
pub use patient::Patient;
pub use trial::ClinicalTrial;
