pub(crate) mod normalizer;
mod parser;

use crate::workflows::ghost_jobs::JobRecord;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read job export: {0}")]
    Io(#[from] std::io::Error),
    #[error("job export is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("job export must be a JSON array of jobs or an object with a `jobs` array")]
    NotAnArray,
}

/// Jobs decoded from an export plus the positions of entries that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntakeReport {
    pub jobs: Vec<JobRecord>,
    pub skipped: Vec<usize>,
}

pub struct JobIntake;

impl JobIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<IntakeReport, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<IntakeReport, IntakeError> {
        let document = serde_json::from_reader(reader)?;
        Self::from_value(document)
    }

    pub fn from_str(raw: &str) -> Result<IntakeReport, IntakeError> {
        let document = serde_json::from_str(raw.trim_start_matches('\u{feff}'))?;
        Self::from_value(document)
    }

    pub fn from_value(document: serde_json::Value) -> Result<IntakeReport, IntakeError> {
        let batch = parser::parse_document(document)?;
        Ok(IntakeReport {
            jobs: batch.jobs,
            skipped: batch.skipped,
        })
    }
}
