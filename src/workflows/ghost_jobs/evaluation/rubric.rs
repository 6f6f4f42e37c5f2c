use super::super::domain::JobRecord;
use super::super::text::{char_len, contains_any, matches};
use super::config::{band_rank, ScoringConfig};
use super::{JobFacts, RubricCategory, RubricComponent};

/// Fixed-budget rubric behind `detailed_score`. Every category is reported, clamped to its budget.
pub(crate) fn score_rubric(
    job: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Vec<RubricComponent> {
    let rubric = &config.rubric;
    let keywords = &config.keywords;
    let text = &facts.text;
    let days = facts.date.days_old.unwrap_or(0);
    let count = facts.applicant_count();
    let no_response = contains_any(&text.response, &keywords.no_response_insight);
    let by_age = |old: f32, fresh: f32| if facts.is_old { old } else { fresh };

    // Tiers follow the same age bands as the risk path.
    let age = match band_rank(&config.thresholds.age_bands, days) {
        0 if job.posted_date.trim().is_empty() => rubric.age_missing_date,
        0 => 0.0,
        1 => rubric.age_over_30,
        2 => rubric.age_over_60,
        _ => rubric.age_over_90,
    };

    let description = if text.description.is_empty() {
        rubric.description_missing
    } else {
        let length = char_len(&text.description);
        if length < rubric.description_short_chars {
            rubric.description_short
        } else if length < rubric.description_medium_chars {
            rubric.description_medium
        } else {
            let vague = matches(&text.description, &keywords.rubric_vague_phrases).len();
            if vague >= config.thresholds.overly_generic_phrase_count {
                rubric.description_overly_generic
            } else if vague > 0 {
                rubric.description_vague
            } else {
                0.0
            }
        }
    };

    let salary = if text.salary.is_empty() {
        by_age(rubric.salary_missing_old, rubric.salary_missing_fresh)
    } else if contains_any(&text.salary, &keywords.rubric_vague_salary) {
        by_age(rubric.salary_vague_old, rubric.salary_vague_fresh)
    } else {
        0.0
    };

    let no_movement = if facts.is_old && count >= config.thresholds.high_applicant_count {
        if no_response {
            rubric.high_applicants_silent
        } else {
            rubric.high_applicants_responsive
        }
    } else {
        0.0
    };

    let communication =
        if facts.is_old && no_response && days >= config.thresholds.no_feedback_days {
            rubric.communication_delay
        } else {
            0.0
        };

    let requirement = if contains_any(&text.title, &keywords.junior_title)
        && contains_any(&text.description, &keywords.rubric_senior_requirement)
    {
        rubric.requirement_anomaly
    } else {
        0.0
    };

    let mut status = 0.0;
    if facts.is_old && contains_any(&text.status, &keywords.repost_status) {
        status += rubric.repost_old;
    }
    if contains_any(&text.status, &keywords.open_application_status) {
        status += by_age(rubric.open_application_old, rubric.open_application_fresh);
    }
    if facts.is_old && contains_any(&text.status, &keywords.repeat_listing_status) {
        status += rubric.repeat_listing_old;
    }

    [
        (RubricCategory::PostingAge, age, rubric.age_budget),
        (RubricCategory::DescriptionQuality, description, rubric.description_budget),
        (RubricCategory::SalaryTransparency, salary, rubric.salary_budget),
        (RubricCategory::HighApplicantsNoMovement, no_movement, rubric.no_movement_budget),
        (RubricCategory::CommunicationDelay, communication, rubric.communication_budget),
        (RubricCategory::RequirementAnomaly, requirement, rubric.requirement_budget),
        (RubricCategory::PostingStatus, status, rubric.posting_status_budget),
    ]
    .into_iter()
    .map(|(category, points, budget)| RubricComponent {
        category,
        points: points.clamp(0.0, budget.max(0.0)),
        budget,
    })
    .collect()
}
