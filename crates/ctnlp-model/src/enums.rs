//! Closed vocabularies used across trial and patient records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputTypeError;

/// Gender eligibility of a trial, or gender of a patient.
///
/// Registry files use the exact strings `All`, `Male` and `Female`.
/// Anything else (including a missing field) is `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Trial accepts every gender.
    All,
    Male,
    Female,
    /// Gender field was empty, absent, or not recognized.
    #[default]
    Unknown,
}

impl Gender {
    /// Returns the lowercase label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::All => "all",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout of a patient topic file.
///
/// - `Trec`: each topic element holds the description as its own text.
/// - `Csiro`: the description is the text of the topic's first child element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    #[default]
    #[serde(rename = "TREC")]
    Trec,
    #[serde(rename = "CSIRO")]
    Csiro,
}

impl InputType {
    /// Returns the selector string accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Trec => "TREC",
            InputType::Csiro => "CSIRO",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputType {
    type Err = InputTypeError;

    /// Parses the selector. Matching is exact: `"trec"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TREC" => Ok(InputType::Trec),
            "CSIRO" => Ok(InputType::Csiro),
            other => Err(InputTypeError::Unsupported {
                value: other.to_string(),
            }),
        }
    }
}
