mod summary;
pub mod views;
mod writer;

pub use summary::{render_flagged, timestamped_file_name};
pub use views::{duration_label, ReportRow};
pub use writer::{write_json, write_master_csv};

use super::batch::BatchOutcome;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode csv report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode json report: {0}")]
    Json(#[from] serde_json::Error),
}

pub const FLAGGED_REPORT: &str = "ghost_jobs_report.json";
pub const FULL_REPORT: &str = "all_jobs_analysis.json";
pub const MASTER_REPORT: &str = "jobs_master_report.csv";

/// Paths of the files produced for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub flagged: Option<PathBuf>,
    pub full: PathBuf,
    pub master: PathBuf,
}

/// Writes the timestamped report set into `dir`, creating it when missing.
///
/// The flagged-only JSON is skipped when nothing was flagged.
pub fn write_reports(
    dir: &Path,
    outcome: &BatchOutcome,
    now: NaiveDateTime,
) -> Result<WrittenReports, ReportError> {
    std::fs::create_dir_all(dir)?;

    let flagged_jobs: Vec<_> = outcome.flagged().cloned().collect();
    let flagged = if flagged_jobs.is_empty() {
        None
    } else {
        let path = dir.join(timestamped_file_name(FLAGGED_REPORT, now));
        write_json(BufWriter::new(File::create(&path)?), &flagged_jobs)?;
        Some(path)
    };

    let full = dir.join(timestamped_file_name(FULL_REPORT, now));
    write_json(BufWriter::new(File::create(&full)?), &outcome.jobs)?;

    let master = dir.join(timestamped_file_name(MASTER_REPORT, now));
    write_master_csv(BufWriter::new(File::create(&master)?), &outcome.jobs)?;

    info!(
        directory = %dir.display(),
        flagged = flagged_jobs.len(),
        total = outcome.jobs.len(),
        "wrote job reports"
    );

    Ok(WrittenReports {
        flagged,
        full,
        master,
    })
}
