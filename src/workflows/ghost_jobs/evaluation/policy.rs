use super::super::text::round1;
use super::config::ScoringConfig;
use super::{JobFacts, RubricComponent};

/// Scores and classification derived from both paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub risk_score: f32,
    pub detailed_score: f32,
    pub final_score: f32,
    pub is_ghost: bool,
}

/// Combines the raw risk sum and the rubric.
///
/// The ghost flag compares the raw, unclamped risk sum against the age-dependent threshold;
/// the reported scores are clamped to `[0, score_ceiling]` and rounded to one decimal.
pub(crate) fn decide(
    raw_risk: f32,
    rubric: &[RubricComponent],
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Verdict {
    let thresholds = &config.thresholds;
    let ceiling = thresholds.score_ceiling.max(0.0);

    let clamped_risk = raw_risk.clamp(0.0, ceiling);
    let rubric_total: f32 = rubric.iter().map(|component| component.points).sum();
    let detailed_score = round1(rubric_total.clamp(0.0, ceiling));
    let final_score = round1(((clamped_risk + detailed_score) / 2.0).clamp(0.0, ceiling));

    let threshold = if facts.is_old {
        thresholds.ghost_threshold_old
    } else {
        thresholds.ghost_threshold_fresh
    };

    Verdict {
        risk_score: round1(clamped_risk),
        detailed_score,
        final_score,
        is_ghost: raw_risk >= threshold,
    }
}
