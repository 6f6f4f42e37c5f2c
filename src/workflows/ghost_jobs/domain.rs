use serde::{Deserialize, Deserializer, Serialize};

use super::evaluation::ScoreBreakdown;
use super::parameters::GhostParameters;
use crate::workflows::intake::normalizer::normalize_field;

/// Scraped job posting as produced by the upstream extractor.
///
/// Every field is optional on the wire; missing, `null`, and non-string scalars decode to text so
/// that a single odd record never aborts a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub posted_date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub applicants: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recruiter_info: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub response_insight: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub work_type: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employment_type: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub posting_status: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_field(&value))
}

/// Normalized view of the free-text posting age.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateFact {
    pub days_old: Option<u32>,
    pub months_old: Option<f32>,
    pub age_risk: u8,
    pub source_text: String,
}

impl DateFact {
    pub(crate) fn unresolved(source_text: &str) -> Self {
        Self {
            days_old: None,
            months_old: None,
            age_risk: 0,
            source_text: source_text.to_string(),
        }
    }
}

/// Normalized view of the free-text applicant counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantFact {
    pub count: Option<u32>,
    pub count_risk: u8,
    pub source_text: String,
}

impl ApplicantFact {
    pub(crate) fn unresolved(source_text: &str) -> Self {
        Self {
            count: None,
            count_risk: 0,
            source_text: source_text.to_string(),
        }
    }
}

/// Structured reason a description was judged weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionFinding {
    TooShort,
    VaguePhrases,
    OverlyGeneric,
    BroadScope,
    SeniorTitleJuniorDescription,
    JuniorTitleSeniorDescription,
    ExcessiveExperience,
    BoilerplateOnly,
}

/// Description quality verdict; `risk` is already capped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionFact {
    pub risk: f32,
    pub indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<DescriptionFinding>,
}

impl DescriptionFact {
    pub fn has(&self, finding: DescriptionFinding) -> bool {
        self.findings.contains(&finding)
    }
}

/// Scoring output for a single posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_score: f32,
    pub detailed_score: f32,
    pub final_score: f32,
    pub is_ghost: bool,
    pub indicators: Vec<String>,
    pub date_fact: DateFact,
    pub applicant_fact: ApplicantFact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_fact: Option<DescriptionFact>,
    pub ghost_parameters: GhostParameters,
    pub is_old_posting: bool,
    pub days_old: Option<u32>,
    pub breakdown: ScoreBreakdown,
}

/// Report category; a posting may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    GhostJob,
    LocaleMatch,
}

impl JobCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GhostJob => "Ghost Job",
            Self::LocaleMatch => "Locale Match",
        }
    }
}

/// A job record paired with its analysis and batch-level annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedJob {
    pub job: JobRecord,
    pub analysis: AnalysisResult,
    pub categories: Vec<JobCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_reason: Option<String>,
}

impl AnalyzedJob {
    pub fn is_flagged(&self) -> bool {
        self.categories.contains(&JobCategory::GhostJob)
    }

    pub fn matches_locale(&self) -> bool {
        self.categories.contains(&JobCategory::LocaleMatch)
    }

    /// Comma-joined category labels, or `Normal` when uncategorized.
    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "Normal".to_string()
        } else {
            self.categories
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
