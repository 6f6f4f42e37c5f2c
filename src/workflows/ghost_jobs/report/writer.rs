use std::io::Write;

use super::super::domain::AnalyzedJob;
use super::views::ReportRow;
use super::ReportError;

/// Writes every job as a master-report row, highest risk first.
pub fn write_master_csv<W: Write>(writer: W, jobs: &[AnalyzedJob]) -> Result<(), ReportError> {
    let mut ordered: Vec<&AnalyzedJob> = jobs.iter().collect();
    ordered.sort_by(|a, b| b.analysis.risk_score.total_cmp(&a.analysis.risk_score));

    let mut csv_writer = csv::Writer::from_writer(writer);
    for analyzed in ordered {
        csv_writer.serialize(ReportRow::from_job(analyzed))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, jobs: &[AnalyzedJob]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, jobs)?;
    Ok(())
}
