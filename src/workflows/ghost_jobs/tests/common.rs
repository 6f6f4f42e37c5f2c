use axum::response::Response;
use serde_json::Value;

use crate::workflows::ghost_jobs::domain::JobRecord;
use crate::workflows::ghost_jobs::evaluation::{GhostJobEngine, JobFacts, ScoringConfig};

pub(super) const VALID_LINK: &str = "https://www.linkedin.com/jobs/view/4012345678/";

pub(super) fn engine() -> GhostJobEngine {
    GhostJobEngine::new(ScoringConfig::default())
}

pub(super) fn facts(job: &JobRecord) -> JobFacts {
    JobFacts::extract(job, &ScoringConfig::default())
}

/// A recent, well-formed posting that trips no evaluator.
pub(super) fn clean_job() -> JobRecord {
    JobRecord {
        title: "Backend Software Engineer".to_string(),
        company: "Papara Teknoloji".to_string(),
        location: "Berlin, Germany".to_string(),
        link: VALID_LINK.to_string(),
        posted_date: "5 days ago".to_string(),
        applicants: "12 applicants".to_string(),
        job_description: "We build payment rails for merchants across Europe and ship weekly releases with a small on-call rotation."
            .to_string(),
        recruiter_info: "Jane Doe, Engineering Manager".to_string(),
        response_insight: "Typically responds within 3 days".to_string(),
        salary: "€70,000 - €85,000".to_string(),
        work_type: "Hybrid".to_string(),
        employment_type: "Full-time".to_string(),
        posting_status: String::new(),
    }
}

/// The fully-loaded stale posting: old, reposted, crowded and silent.
pub(super) fn stale_reposted_job() -> JobRecord {
    JobRecord {
        posted_date: "3 months ago".to_string(),
        applicants: "150+ applicants".to_string(),
        salary: String::new(),
        posting_status: "Reposted".to_string(),
        response_insight: "No response insight yet".to_string(),
        ..clean_job()
    }
}

pub(super) fn with_posted_date(job: JobRecord, posted_date: &str) -> JobRecord {
    JobRecord {
        posted_date: posted_date.to_string(),
        ..job
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
