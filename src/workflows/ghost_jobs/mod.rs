//! Ghost-job risk scoring: field parsers, signal evaluators, the dual-path aggregator,
//! and the batch classifier with its locale/domain gate.

pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod link;
pub mod locale;
pub mod parameters;
pub mod parsers;
pub mod report;
pub mod router;
mod text;

#[cfg(test)]
mod tests;

pub use batch::{BatchClassifier, BatchOutcome, BatchSummary};
pub use domain::{
    AnalysisResult, AnalyzedJob, ApplicantFact, DateFact, DescriptionFact, DescriptionFinding,
    JobCategory, JobRecord,
};
pub use evaluation::{
    analyze_description, evaluate_signals, GhostJobEngine, GhostSignal, JobFacts,
    RubricCategory, RubricComponent, ScoreBreakdown, ScoreComponent, ScoringConfig, Verdict,
};
pub use link::{canonicalize_link, is_job_view_link};
pub use locale::LocaleDomainFilter;
pub use parameters::GhostParameters;
pub use parsers::{parse_age, parse_applicants};
pub use report::{ReportError, ReportRow};
pub use router::ghost_job_router;
