use serde::Serialize;

use super::super::domain::AnalyzedJob;

/// One line of the master report, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Score")]
    pub score: f32,
    #[serde(rename = "Ghost Job")]
    pub ghost_job: &'static str,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Posted Date")]
    pub posted_date: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Applicants")]
    pub applicants: String,
    #[serde(rename = "Applicant Status")]
    pub applicant_status: String,
    #[serde(rename = "Recruiter")]
    pub recruiter: String,
    #[serde(rename = "Response Insight")]
    pub response_insight: String,
    #[serde(rename = "Work Type")]
    pub work_type: String,
    #[serde(rename = "Employment Type")]
    pub employment_type: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Posting Status")]
    pub posting_status: String,
    #[serde(rename = "Date Analysis")]
    pub date_analysis: String,
    #[serde(rename = "Applicant Analysis")]
    pub applicant_analysis: String,
    #[serde(rename = "Indicators")]
    pub indicators: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl ReportRow {
    pub fn from_job(analyzed: &AnalyzedJob) -> Self {
        let job = &analyzed.job;
        let analysis = &analyzed.analysis;
        let date = &analysis.date_fact;
        let applicants = &analysis.applicant_fact;

        // Day counts are exact; stored months are rounded to one decimal.
        let exact_months = date
            .days_old
            .map(|days| days as f32 / 30.0)
            .or(date.months_old);

        let applicant_column = match applicants.count {
            Some(count) if count > 0 => count.to_string(),
            _ => job.applicants.clone(),
        };

        let date_analysis = match date.days_old {
            Some(days) => format!("{days} days old (risk {})", date.age_risk),
            None => "unresolved".to_string(),
        };
        let applicant_analysis = match applicants.count {
            Some(count) => format!("{count} applicants (risk {})", applicants.count_risk),
            None => "unresolved".to_string(),
        };

        Self {
            category: analyzed.category_label(),
            score: analysis.final_score,
            ghost_job: if analysis.is_ghost { "Yes" } else { "No" },
            company: job.company.clone(),
            title: job.title.clone(),
            location: job.location.clone(),
            posted_date: job.posted_date.clone(),
            duration: duration_label(exact_months, &job.posted_date),
            applicants: applicant_column,
            applicant_status: or_unknown(&job.applicants),
            recruiter: job.recruiter_info.clone(),
            response_insight: job.response_insight.clone(),
            work_type: job.work_type.clone(),
            employment_type: job.employment_type.clone(),
            salary: job.salary.clone(),
            posting_status: job.posting_status.clone(),
            date_analysis,
            applicant_analysis,
            indicators: if analysis.indicators.is_empty() {
                "None".to_string()
            } else {
                analysis.indicators.join("; ")
            },
            link: job.link.clone(),
        }
    }
}

fn or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Posting age in the largest applicable unit; the raw text when the age is unknown.
pub fn duration_label(months_old: Option<f32>, posted_date: &str) -> String {
    match months_old {
        Some(months) if months >= 12.0 => {
            let whole = months.floor() as u32;
            format!("{} {}", plural(whole / 12, "year"), plural(whole % 12, "month"))
        }
        Some(months) if months >= 1.0 => plural(months.floor() as u32, "month"),
        Some(months) => {
            let days = (months.max(0.0) * 30.0).round() as u32;
            if days >= 7 {
                plural(days / 7, "week")
            } else {
                plural(days, "day")
            }
        }
        None => or_unknown(posted_date),
    }
}
