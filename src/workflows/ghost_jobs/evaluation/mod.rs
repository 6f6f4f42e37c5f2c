pub mod config;
mod description;
mod policy;
mod rubric;
mod signals;

pub use config::{
    DescriptionKeywords, DescriptionWeights, KeywordFamily, KeywordTables, LocaleFilterConfig,
    RiskBand, RubricConfig, ScoringConfig, ScoringThresholds, SignalWeights,
};
pub use description::analyze_description;
pub use policy::Verdict;
pub use signals::evaluate_signals;

use super::domain::{AnalysisResult, ApplicantFact, DateFact, DescriptionFact, JobRecord};
use super::parameters::GhostParameters;
use super::parsers::{parse_age, parse_applicants};
use super::text::lower;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer applying one immutable [`ScoringConfig`] to job records.
#[derive(Debug, Clone, Default)]
pub struct GhostJobEngine {
    config: ScoringConfig,
}

impl GhostJobEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn analyze(&self, job: &JobRecord) -> AnalysisResult {
        let facts = JobFacts::extract(job, &self.config);
        let risk_path = signals::evaluate_signals(job, &facts, &self.config);
        let rubric = rubric::score_rubric(job, &facts, &self.config);
        let raw_risk: f32 = risk_path.iter().map(|component| component.points).sum();
        let verdict = policy::decide(raw_risk, &rubric, &facts, &self.config);

        let indicators: Vec<String> = risk_path
            .iter()
            .flat_map(|component| component.indicators.iter().cloned())
            .collect();
        let ghost_parameters = GhostParameters::extract(job, &facts, &self.config);

        debug!(
            risk_score = verdict.risk_score,
            detailed_score = verdict.detailed_score,
            final_score = verdict.final_score,
            is_ghost = verdict.is_ghost,
            indicators = indicators.len(),
            "analysed job posting"
        );

        AnalysisResult {
            risk_score: verdict.risk_score,
            detailed_score: verdict.detailed_score,
            final_score: verdict.final_score,
            is_ghost: verdict.is_ghost,
            indicators,
            days_old: facts.date.days_old,
            is_old_posting: facts.is_old,
            date_fact: facts.date,
            applicant_fact: facts.applicants,
            description_fact: facts.description,
            ghost_parameters,
            breakdown: ScoreBreakdown {
                raw_risk,
                risk_path,
                rubric,
            },
        }
    }
}

/// Facts derived once per job and shared by both score paths.
#[derive(Debug, Clone)]
pub struct JobFacts {
    pub date: DateFact,
    pub applicants: ApplicantFact,
    pub description: Option<DescriptionFact>,
    pub is_old: bool,
    pub(crate) text: LoweredText,
}

impl JobFacts {
    pub fn extract(job: &JobRecord, config: &ScoringConfig) -> Self {
        let date = parse_age(&job.posted_date, config);
        let applicants = parse_applicants(&job.applicants, config);
        let description = if job.job_description.trim().is_empty() {
            None
        } else {
            Some(analyze_description(&job.job_description, &job.title, config))
        };
        let is_old = date.days_old.unwrap_or(0) >= config.thresholds.old_posting_days;

        Self {
            date,
            applicants,
            description,
            is_old,
            text: LoweredText::from_job(job),
        }
    }

    /// Weight applied to age-sensitive evaluators: full for old postings, dampened otherwise.
    pub fn age_factor(&self, config: &ScoringConfig) -> f32 {
        if self.is_old {
            1.0
        } else {
            config.thresholds.fresh_dampening
        }
    }

    pub fn applicant_count(&self) -> u32 {
        self.applicants.count.unwrap_or(0)
    }
}

/// Lowercased copies of the free-text fields consulted by keyword rules.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoweredText {
    pub(crate) title: String,
    pub(crate) company: String,
    pub(crate) location: String,
    pub(crate) applicants: String,
    pub(crate) description: String,
    pub(crate) recruiter: String,
    pub(crate) response: String,
    pub(crate) salary: String,
    pub(crate) status: String,
}

impl LoweredText {
    fn from_job(job: &JobRecord) -> Self {
        Self {
            title: lower(&job.title),
            company: lower(&job.company),
            location: lower(&job.location),
            applicants: lower(&job.applicants),
            description: lower(&job.job_description),
            recruiter: lower(&job.recruiter_info),
            response: lower(&job.response_insight),
            salary: lower(&job.salary),
            status: lower(&job.posting_status),
        }
    }
}

/// Risk-path evaluator that produced a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostSignal {
    RepostCombo,
    PostingAge,
    ApplicantCount,
    NoMovement,
    DescriptionQuality,
    SalaryTransparency,
    CommunicationDelay,
    RequirementAnomaly,
    SuspiciousCompany,
    VagueTitle,
    GenericLocation,
    TitleLength,
    CompanyLength,
    VagueApplicantStatus,
    MissingDate,
    StaleWithoutApplicants,
    InvalidLink,
    RecruiterPromotion,
    OpenApplication,
    RepeatListing,
}

/// Discrete contribution to `risk_score`, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: GhostSignal,
    pub points: f32,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    PostingAge,
    DescriptionQuality,
    SalaryTransparency,
    HighApplicantsNoMovement,
    CommunicationDelay,
    RequirementAnomaly,
    PostingStatus,
}

/// Budgeted category of `detailed_score`; `points` never exceeds `budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricComponent {
    pub category: RubricCategory,
    pub points: f32,
    pub budget: f32,
}

/// Both score paths, contribution by contribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub raw_risk: f32,
    pub risk_path: Vec<ScoreComponent>,
    pub rubric: Vec<RubricComponent>,
}

impl ScoreBreakdown {
    /// Points a risk-path evaluator contributed, zero when it did not fire.
    pub fn contribution(&self, signal: GhostSignal) -> f32 {
        self.risk_path
            .iter()
            .filter(|component| component.signal == signal)
            .map(|component| component.points)
            .sum()
    }

    pub fn rubric_points(&self, category: RubricCategory) -> f32 {
        self.rubric
            .iter()
            .filter(|component| component.category == category)
            .map(|component| component.points)
            .sum()
    }
}
