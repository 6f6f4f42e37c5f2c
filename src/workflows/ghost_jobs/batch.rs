use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{AnalysisResult, AnalyzedJob, JobCategory, JobRecord};
use super::evaluation::{GhostJobEngine, ScoringConfig};
use super::link::canonicalize_link;
use super::locale::LocaleDomainFilter;

/// Counts reported alongside every classified batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub flagged: usize,
    pub locale_matches: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub summary: BatchSummary,
    pub jobs: Vec<AnalyzedJob>,
}

impl BatchOutcome {
    pub fn flagged(&self) -> impl Iterator<Item = &AnalyzedJob> {
        self.jobs.iter().filter(|job| job.is_flagged())
    }

    pub fn locale_matches(&self) -> impl Iterator<Item = &AnalyzedJob> {
        self.jobs.iter().filter(|job| job.matches_locale())
    }
}

/// Scores a collection of postings and tags each with its categories.
#[derive(Debug, Clone)]
pub struct BatchClassifier {
    engine: GhostJobEngine,
    locale: LocaleDomainFilter,
}

impl BatchClassifier {
    pub fn new(config: ScoringConfig) -> Self {
        let locale = LocaleDomainFilter::new(config.locale.clone());
        Self {
            engine: GhostJobEngine::new(config),
            locale,
        }
    }

    pub fn engine(&self) -> &GhostJobEngine {
        &self.engine
    }

    /// Canonicalizes the link, scores the posting, and applies the locale gate.
    pub fn classify_job(&self, mut job: JobRecord) -> AnalyzedJob {
        job.link = canonicalize_link(&job.link);
        let analysis = self.engine.analyze(&job);
        let filter_reason = self.locale.matches(&job);

        let mut categories = Vec::new();
        if self.is_flagged(&analysis) {
            categories.push(JobCategory::GhostJob);
        }
        if filter_reason.is_some() {
            categories.push(JobCategory::LocaleMatch);
        }

        AnalyzedJob {
            job,
            analysis,
            categories,
            filter_reason,
        }
    }

    pub fn classify<I>(&self, jobs: I) -> BatchOutcome
    where
        I: IntoIterator<Item = JobRecord>,
    {
        let jobs: Vec<AnalyzedJob> = jobs
            .into_iter()
            .map(|job| self.classify_job(job))
            .collect();

        let summary = BatchSummary {
            total: jobs.len(),
            flagged: jobs.iter().filter(|job| job.is_flagged()).count(),
            locale_matches: jobs.iter().filter(|job| job.matches_locale()).count(),
        };

        info!(
            total = summary.total,
            flagged = summary.flagged,
            locale_matches = summary.locale_matches,
            locale = self.locale.label(),
            "classified job batch"
        );

        BatchOutcome { summary, jobs }
    }

    fn is_flagged(&self, analysis: &AnalysisResult) -> bool {
        analysis.is_ghost || analysis.risk_score >= self.engine.config().thresholds.flag_threshold
    }
}

impl Default for BatchClassifier {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
