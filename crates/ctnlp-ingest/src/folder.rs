//! Batch parsing of a folder of study files.

use std::path::Path;
use std::time::Instant;

use ctnlp_model::ClinicalTrial;
use ctnlp_parse::EligibilityInterpreter;
use tracing::{error, info, info_span};

use crate::discovery::list_xml_files;
use crate::error::{IngestError, Result};
use crate::trial::load_clinical_trial;

/// Parses every study file under `folder`, in sorted path order.
///
/// `first_n` limits the run to the first files of that order. A folder
/// without any `.xml` file is an error. The first file that fails to parse
/// stops the run.
pub fn parse_clinical_trials_from_folder(
    folder: &Path,
    first_n: Option<usize>,
    interpreter: &EligibilityInterpreter,
) -> Result<Vec<ClinicalTrial>> {
    parse_clinical_trials_with(folder, first_n, interpreter, |_| {})
}

/// Same as [`parse_clinical_trials_from_folder`], reporting each file before it is parsed.
pub fn parse_clinical_trials_with<F>(
    folder: &Path,
    first_n: Option<usize>,
    interpreter: &EligibilityInterpreter,
    mut on_file: F,
) -> Result<Vec<ClinicalTrial>>
where
    F: FnMut(FileProgress<'_>),
{
    let span = info_span!("trial_folder", folder = %folder.display());
    let _guard = span.enter();

    let mut files = list_xml_files(folder)?;
    if files.is_empty() {
        error!(folder = %folder.display(), "no XML files in folder");
        return Err(IngestError::NoTrialFiles {
            path: folder.to_path_buf(),
        });
    }
    if let Some(limit) = first_n {
        files.truncate(limit);
    }

    let start = Instant::now();
    let total = files.len();
    let mut trials = Vec::with_capacity(total);
    for (index, path) in files.iter().enumerate() {
        on_file(FileProgress { index, total, path });
        trials.push(load_clinical_trial(path, interpreter)?);
    }

    log_criteria_coverage(&trials, start);
    Ok(trials)
}

/// Position of the file about to be parsed within a folder run.
#[derive(Debug, Clone, Copy)]
pub struct FileProgress<'a> {
    pub index: usize,
    pub total: usize,
    pub path: &'a Path,
}

/// Logs how many trials had their criteria split into inclusion/exclusion lists.
pub fn log_criteria_coverage(trials: &[ClinicalTrial], start: Instant) {
    let parsed = trials.iter().filter(|trial| trial.has_criteria()).count();
    let ratio = if trials.is_empty() {
        0.0
    } else {
        parsed as f64 / trials.len() as f64
    };
    info!(
        trial_count = trials.len(),
        parsed_criteria = parsed,
        parsed_ratio = ratio,
        duration_ms = start.elapsed().as_millis(),
        "trial folder parsed"
    );
}
