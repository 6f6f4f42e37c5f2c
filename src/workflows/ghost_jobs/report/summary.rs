use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::Path;

use super::super::domain::AnalyzedJob;

/// Inserts a `_YYYYmmdd_HHMMSS` stamp before the extension.
pub fn timestamped_file_name(name: &str, now: NaiveDateTime) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S");
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(extension)) => format!(
            "{}_{stamp}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        _ => format!("{name}_{stamp}"),
    }
}

/// Console listing of flagged postings.
pub fn render_flagged(jobs: &[AnalyzedJob]) -> String {
    let flagged: Vec<&AnalyzedJob> = jobs.iter().filter(|job| job.is_flagged()).collect();
    if flagged.is_empty() {
        return "No suspicious postings found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Suspicious postings: {}", flagged.len());
    for (position, analyzed) in flagged.iter().enumerate() {
        let job = &analyzed.job;
        let analysis = &analyzed.analysis;
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {}", position + 1, or_dash(&job.title));
        let _ = writeln!(out, "   Company:  {}", or_dash(&job.company));
        let _ = writeln!(out, "   Location: {}", or_dash(&job.location));
        let _ = writeln!(
            out,
            "   Score:    {:.1}/10 (risk {:.1}, detailed {:.1})",
            analysis.final_score, analysis.risk_score, analysis.detailed_score
        );
        if let Some(reason) = &analyzed.filter_reason {
            let _ = writeln!(out, "   Match:    {reason}");
        }
        for indicator in &analysis.indicators {
            let _ = writeln!(out, "   - {indicator}");
        }
        let _ = writeln!(out, "   Link:     {}", or_dash(&job.link));
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .expect("valid date")
            .and_hms_opt(9, 5, 30)
            .expect("valid time")
    }

    #[test]
    fn stamp_goes_before_extension() {
        assert_eq!(
            timestamped_file_name("jobs_master_report.csv", now()),
            "jobs_master_report_20250307_090530.csv"
        );
        assert_eq!(timestamped_file_name("report", now()), "report_20250307_090530");
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(render_flagged(&[]), "No suspicious postings found.\n");
    }
}
