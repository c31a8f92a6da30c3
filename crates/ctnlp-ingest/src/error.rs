//! Error types for registry XML ingestion.

use std::path::PathBuf;

use ctnlp_model::InputTypeError;
use thiserror::Error;

/// Errors that can occur while loading trial or patient files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Folder walk found nothing to parse.
    #[error("no XML files in folder {path}")]
    NoTrialFiles { path: PathBuf },

    // === XML Errors ===
    /// The document is not well-formed.
    #[error("malformed XML at byte {position}: {message}")]
    MalformedXml { position: u64, message: String },

    /// The document has no root element.
    #[error("XML document has no root element")]
    MissingRoot,

    /// A file failed to parse; wraps the underlying error with its path.
    #[error("failed to parse {path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<IngestError>,
    },

    // === Record Errors ===
    /// An element every record of this kind must have.
    #[error("required element <{element}> not found")]
    MissingElement { element: String },

    /// Patient topic has a missing or non-integer `number` attribute.
    #[error("invalid patient number '{value}'")]
    InvalidPatientNumber { value: String },

    /// CSIRO topic without a description child.
    #[error("patient {patient_id} has no description element")]
    MissingDescription { patient_id: i64 },

    /// Unsupported patient topic layout.
    #[error(transparent)]
    InputType(#[from] InputTypeError),
}

impl IngestError {
    /// Attaches the file path to an error raised while parsing that file.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ (Self::InFile { .. } | Self::FileRead { .. }) => already,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
