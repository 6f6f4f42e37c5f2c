use serde::{Deserialize, Serialize};

use super::domain::{DescriptionFinding, JobRecord};
use super::evaluation::{JobFacts, ScoringConfig};
use super::text::{char_len, contains_any};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationRisk {
    Unknown,
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl DurationRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::LowRisk => "Low Risk",
            Self::MediumRisk => "Medium Risk",
            Self::HighRisk => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryAccuracy {
    Specific,
    Vague,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDuration {
    pub days_old: u32,
    pub level: DurationRisk,
    pub threshold_exceeded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionQuality {
    pub has_description: bool,
    pub description_length: usize,
    pub is_too_short: bool,
    pub has_vague_phrases: bool,
    pub too_broad_scope: bool,
    pub combined_irrelevant_responsibilities: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationDelay {
    pub no_feedback: bool,
    pub days_without_feedback: u32,
    pub threshold_exceeded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTransparency {
    pub salary_provided: bool,
    pub accuracy: SalaryAccuracy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementAnomalies {
    pub senior_experience_for_junior_title: bool,
    pub unrealistic_years: bool,
    pub mixed_role_expectations: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighApplicantsNoMovement {
    pub applicant_count: u32,
    pub has_high_applicants: bool,
    pub has_response_insight: bool,
    pub is_suspicious: bool,
}

/// Read-only projection of the facts behind a score, for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostParameters {
    pub posting_duration: PostingDuration,
    pub job_description_quality: DescriptionQuality,
    pub communication_delay: CommunicationDelay,
    pub salary_transparency: SalaryTransparency,
    pub requirement_anomalies: RequirementAnomalies,
    pub high_applicants_no_movement: HighApplicantsNoMovement,
}

impl GhostParameters {
    pub fn extract(job: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Self {
        let thresholds = &config.thresholds;
        let keywords = &config.keywords;
        let text = &facts.text;

        let days_old = facts.date.days_old.unwrap_or(0);
        let level = match facts.date.days_old {
            None | Some(0) => DurationRisk::Unknown,
            Some(days) if days <= thresholds.old_posting_days => DurationRisk::LowRisk,
            Some(days) if days <= thresholds.duration_medium_max_days => DurationRisk::MediumRisk,
            Some(_) => DurationRisk::HighRisk,
        };

        let description = job.job_description.trim();
        let description_length = char_len(description);
        let finding = |wanted: DescriptionFinding| {
            facts
                .description
                .as_ref()
                .is_some_and(|fact| fact.has(wanted))
        };

        let no_feedback = contains_any(&text.response, &keywords.no_response_insight);

        let salary = job.salary.trim();
        let accuracy = if salary.chars().any(|c| c.is_ascii_digit()) {
            SalaryAccuracy::Specific
        } else if !salary.is_empty() {
            SalaryAccuracy::Vague
        } else {
            SalaryAccuracy::Unknown
        };

        let applicant_count = facts.applicant_count();
        let has_high_applicants = applicant_count >= thresholds.high_applicant_count;
        // Only an explicit "no response insight" counts as silence, as in scoring.
        let has_response_insight = !no_feedback;

        Self {
            posting_duration: PostingDuration {
                days_old,
                level,
                threshold_exceeded: days_old > thresholds.old_posting_days,
            },
            job_description_quality: DescriptionQuality {
                has_description: description_length > thresholds.description_min_chars,
                description_length,
                is_too_short: description_length > 0
                    && description_length < config.rubric.description_short_chars,
                has_vague_phrases: contains_any(&text.description, &keywords.parameter_vague_phrases),
                too_broad_scope: finding(DescriptionFinding::BroadScope)
                    || finding(DescriptionFinding::OverlyGeneric),
                combined_irrelevant_responsibilities: finding(DescriptionFinding::BroadScope),
            },
            communication_delay: CommunicationDelay {
                no_feedback,
                days_without_feedback: if no_feedback { days_old } else { 0 },
                threshold_exceeded: no_feedback && days_old >= thresholds.no_feedback_days,
            },
            salary_transparency: SalaryTransparency {
                salary_provided: !salary.is_empty(),
                accuracy,
            },
            requirement_anomalies: RequirementAnomalies {
                senior_experience_for_junior_title: finding(
                    DescriptionFinding::JuniorTitleSeniorDescription,
                ) || finding(DescriptionFinding::ExcessiveExperience),
                unrealistic_years: finding(DescriptionFinding::ExcessiveExperience),
                mixed_role_expectations: finding(DescriptionFinding::BroadScope),
            },
            high_applicants_no_movement: HighApplicantsNoMovement {
                applicant_count,
                has_high_applicants,
                has_response_insight,
                is_suspicious: has_high_applicants && no_feedback,
            },
        }
    }
}
