use super::common::*;
use std::io::Cursor;

use crate::workflows::ghost_jobs::batch::BatchClassifier;
use crate::workflows::ghost_jobs::domain::{JobCategory, JobRecord};
use crate::workflows::ghost_jobs::report::{render_flagged, write_master_csv, ReportRow};

fn istanbul_devops() -> JobRecord {
    JobRecord {
        title: "Senior DevOps Engineer".to_string(),
        location: "Istanbul, Türkiye".to_string(),
        link: "4012345678".to_string(),
        ..clean_job()
    }
}

#[test]
fn batch_partitions_and_counts_categories() {
    let classifier = BatchClassifier::default();
    let outcome = classifier.classify(vec![
        clean_job(),
        stale_reposted_job(),
        JobRecord {
            location: "Ankara".to_string(),
            ..stale_reposted_job()
        },
        istanbul_devops(),
    ]);

    assert_eq!(outcome.summary.total, 4);
    assert_eq!(outcome.summary.flagged, 2);
    assert_eq!(outcome.summary.locale_matches, 2);

    assert!(outcome.jobs[0].categories.is_empty());
    assert_eq!(outcome.jobs[0].category_label(), "Normal");
    assert_eq!(
        outcome.jobs[2].categories,
        vec![JobCategory::GhostJob, JobCategory::LocaleMatch]
    );
    assert_eq!(outcome.jobs[2].category_label(), "Ghost Job, Locale Match");
    assert_eq!(outcome.flagged().count(), 2);
    assert_eq!(outcome.locale_matches().count(), 2);
}

#[test]
fn links_are_canonicalized_before_scoring() {
    let classifier = BatchClassifier::default();
    let analyzed = classifier.classify_job(istanbul_devops());

    assert_eq!(analyzed.job.link, VALID_LINK);
    assert_eq!(
        analyzed
            .analysis
            .breakdown
            .contribution(crate::workflows::ghost_jobs::GhostSignal::InvalidLink),
        0.0
    );
    assert_eq!(
        analyzed.filter_reason.as_deref(),
        Some("Turkey IT (Istanbul, Türkiye)")
    );
}

#[test]
fn risk_score_alone_can_flag_a_fresh_posting() {
    let classifier = BatchClassifier::default();
    let analyzed = classifier.classify_job(JobRecord::default());

    assert!(!analyzed.analysis.is_ghost);
    assert!(analyzed.analysis.risk_score >= 3.0);
    assert!(analyzed.is_flagged());
}

#[test]
fn one_odd_record_does_not_disturb_the_rest() {
    let classifier = BatchClassifier::default();
    let odd = JobRecord {
        posted_date: "99999999999999999999 months ago".to_string(),
        applicants: "+++".to_string(),
        ..JobRecord::default()
    };
    let outcome = classifier.classify(vec![odd, clean_job()]);

    assert_eq!(outcome.summary.total, 2);
    assert_eq!(outcome.jobs[0].analysis.days_old, None);
    assert_eq!(outcome.jobs[1].analysis, classifier.engine().analyze(&clean_job()));
}

#[test]
fn master_report_is_sorted_by_risk() {
    let classifier = BatchClassifier::default();
    let outcome = classifier.classify(vec![clean_job(), stale_reposted_job()]);

    let mut buffer = Vec::new();
    write_master_csv(Cursor::new(&mut buffer), &outcome.jobs).expect("csv written");
    let csv = String::from_utf8(buffer).expect("utf8 csv");
    let mut lines = csv.lines();

    let header = lines.next().expect("header row");
    assert!(header.starts_with("Category,Score,Ghost Job,Company,Title,Location"));
    assert!(header.ends_with("Indicators,Link"));
    assert!(lines.next().expect("first row").starts_with("Ghost Job,10.0,Yes,"));
    assert!(lines.next().expect("second row").starts_with("Normal,1.3,No,"));
}

#[test]
fn report_row_projects_columns() {
    let classifier = BatchClassifier::default();
    let analyzed = classifier.classify_job(stale_reposted_job());
    let row = ReportRow::from_job(&analyzed);

    assert_eq!(row.duration, "3 months");
    assert_eq!(row.applicants, "150");
    assert_eq!(row.applicant_status, "150+ applicants");
    assert_eq!(row.ghost_job, "Yes");
    assert!(row.indicators.starts_with("old posting + reposted; posted 90+ days ago"));

    let clean = ReportRow::from_job(&classifier.classify_job(clean_job()));
    assert_eq!(clean.indicators, "None");
    assert_eq!(clean.duration, "5 days");
}

#[test]
fn flagged_listing_names_each_posting() {
    let classifier = BatchClassifier::default();
    let outcome = classifier.classify(vec![clean_job(), stale_reposted_job()]);
    let listing = render_flagged(&outcome.jobs);

    assert!(listing.starts_with("Suspicious postings: 1"));
    assert!(listing.contains("1. Backend Software Engineer"));
    assert!(listing.contains("   - old posting + reposted"));
    assert!(listing.contains(VALID_LINK));
}
