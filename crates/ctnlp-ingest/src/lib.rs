//! Loading of registry XML into trial and patient records.
//!
//! - [`xml`]: owned element tree built with `quick-xml`
//! - [`trial`]: `clinical_study` documents to [`ctnlp_model::ClinicalTrial`]
//! - [`discovery`] / [`folder`]: recursive `*.xml` discovery and batch parsing
//! - [`patient`]: TREC and CSIRO patient topic files

pub mod discovery;
pub mod error;
pub mod folder;
pub mod patient;
pub mod trial;
pub mod xml;

pub use discovery::list_xml_files;
pub use error::{IngestError, Result};
pub use folder::{
    FileProgress, log_criteria_coverage, parse_clinical_trials_from_folder,
    parse_clinical_trials_with,
};
pub use patient::{load_patients_from_xml, parse_patients};
pub use trial::{
    EMPTY_TEXT_PLACEHOLDER, compose_text, eligibility_block, load_clinical_trial,
    parse_clinical_trial,
};
pub use xml::{XmlElement, parse_document, read_document};
