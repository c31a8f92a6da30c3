use std::path::Path;

use anyhow::{Context, Result};
use ctnlp_ingest::{load_patients_from_xml, parse_clinical_trials_with};
use ctnlp_model::{ClinicalTrial, ParsedCriteria};
use ctnlp_parse::{CriteriaHeaders, EligibilityInterpreter};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

use crate::cli::{CriteriaArgs, OutputFormatArg, PatientsArgs, TrialsArgs};
use crate::summary::{print_criteria, print_patients, print_trials};

/// Builds the interpreter, reading header overrides from `headers` when given.
pub fn load_interpreter(headers: Option<&Path>) -> Result<EligibilityInterpreter> {
    let Some(path) = headers else {
        return Ok(EligibilityInterpreter::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read headers file {}", path.display()))?;
    let headers: CriteriaHeaders = serde_json::from_str(&content)
        .with_context(|| format!("parse headers file {}", path.display()))?;
    debug!(
        inclusion = headers.inclusion.len(),
        exclusion = headers.exclusion.len(),
        "loaded criteria headers"
    );
    Ok(EligibilityInterpreter::new(headers))
}

pub fn run_trials(args: &TrialsArgs, interpreter: &EligibilityInterpreter) -> Result<()> {
    let trials = parse_trials_with_progress(&args.folder, args.first_n, interpreter)?;
    match args.format {
        OutputFormatArg::Table => print_trials(&trials),
        OutputFormatArg::Json => print_json(&trials)?,
    }
    Ok(())
}

/// Parses a trial folder file by file, showing progress on stderr.
pub fn parse_trials_with_progress(
    folder: &Path,
    first_n: Option<usize>,
    interpreter: &EligibilityInterpreter,
) -> Result<Vec<ClinicalTrial>> {
    let progress = ProgressBar::no_length();
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}") {
        progress.set_style(style);
    }

    let result = parse_clinical_trials_with(folder, first_n, interpreter, |file| {
        progress.set_length(file.total as u64);
        progress.set_position(file.index as u64);
        progress.set_message(file.path.display().to_string());
    });
    progress.finish_and_clear();

    result.with_context(|| format!("parse trials in {}", folder.display()))
}

pub fn run_patients(args: &PatientsArgs) -> Result<()> {
    let patients = load_patients_from_xml(&args.file, &args.input_type)
        .with_context(|| format!("load patients from {}", args.file.display()))?;
    match args.format {
        OutputFormatArg::Table => print_patients(&patients),
        OutputFormatArg::Json => print_json(&patients)?,
    }
    Ok(())
}

/// Outcome of splitting one criteria text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriteriaReport {
    pub parsed: bool,
    pub inclusion: Vec<String>,
    pub exclusion: Vec<String>,
}

impl From<Option<ParsedCriteria>> for CriteriaReport {
    fn from(parsed: Option<ParsedCriteria>) -> Self {
        match parsed {
            Some(criteria) => Self {
                parsed: true,
                inclusion: criteria.inclusion,
                exclusion: criteria.exclusion,
            },
            None => Self {
                parsed: false,
                inclusion: Vec::new(),
                exclusion: Vec::new(),
            },
        }
    }
}

pub fn read_criteria(path: &Path, interpreter: &EligibilityInterpreter) -> Result<CriteriaReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read criteria file {}", path.display()))?;
    Ok(interpreter.parse_criteria(&text).into())
}

pub fn run_criteria(args: &CriteriaArgs, interpreter: &EligibilityInterpreter) -> Result<()> {
    let report = read_criteria(&args.file, interpreter)?;
    match args.format {
        OutputFormatArg::Table => print_criteria(&report),
        OutputFormatArg::Json => print_json(&report)?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
