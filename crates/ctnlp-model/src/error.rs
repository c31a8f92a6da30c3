use thiserror::Error;

/// Rejected patient topic layout selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputTypeError {
    #[error("input_type can be only 'TREC' or 'CSIRO', got '{value}'")]
    Unsupported { value: String },
}
