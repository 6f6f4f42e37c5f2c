use super::super::domain::JobRecord;
use super::super::link::is_job_view_link;
use super::super::text::{char_len, contains_any, first_keyword, first_match, matches};
use super::config::{reached_band, ScoringConfig};
use super::{GhostSignal, JobFacts, ScoreComponent};

/// Runs every risk-path evaluator in order; only evaluators that fired are returned.
pub fn evaluate_signals(
    job: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let evaluators: [fn(&JobRecord, &JobFacts, &ScoringConfig) -> Option<ScoreComponent>; 20] = [
        repost_combo,
        posting_age,
        applicant_count,
        no_movement,
        description_quality,
        salary_transparency,
        communication_delay,
        requirement_anomaly,
        suspicious_company,
        vague_title,
        generic_location,
        title_length,
        company_length,
        vague_applicant_status,
        missing_date,
        stale_without_applicants,
        invalid_link,
        recruiter_promotion,
        open_application,
        repeat_listing,
    ];

    evaluators
        .iter()
        .filter_map(|evaluate| evaluate(job, facts, config))
        .filter(|component| component.points > 0.0)
        .collect()
}

fn component(signal: GhostSignal, points: f32, indicator: Option<String>) -> Option<ScoreComponent> {
    Some(ScoreComponent {
        signal,
        points,
        indicators: indicator.into_iter().collect(),
    })
}

fn fired(signal: GhostSignal, points: f32, indicator: &str) -> Option<ScoreComponent> {
    component(signal, points, Some(indicator.to_string()))
}

fn no_response(facts: &JobFacts, config: &ScoringConfig) -> bool {
    contains_any(&facts.text.response, &config.keywords.no_response_insight)
}

fn repost_combo(_: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    if facts.is_old && contains_any(&facts.text.status, &config.keywords.repost_status) {
        return fired(
            GhostSignal::RepostCombo,
            config.weights.repost_combo,
            "old posting + reposted",
        );
    }
    None
}

fn posting_age(_: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let days = facts.date.days_old?;
    if facts.date.age_risk == 0 {
        return None;
    }
    let since = reached_band(&config.thresholds.age_bands, days)
        .map(|band| band.min)
        .unwrap_or(days);
    component(
        GhostSignal::PostingAge,
        f32::from(facts.date.age_risk) * facts.age_factor(config),
        Some(format!("posted {since}+ days ago")),
    )
}

fn applicant_count(_: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let count = facts.applicants.count?;
    if facts.applicants.count_risk == 0 {
        return None;
    }
    component(
        GhostSignal::ApplicantCount,
        f32::from(facts.applicants.count_risk) * facts.age_factor(config),
        Some(format!("high applicant count ({count})")),
    )
}

fn no_movement(_: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    if facts.is_old
        && facts.applicant_count() >= config.thresholds.high_applicant_count
        && no_response(facts, config)
    {
        return fired(
            GhostSignal::NoMovement,
            config.weights.no_movement,
            "many applicants but no response movement",
        );
    }
    None
}

fn description_quality(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let description = facts.description.as_ref()?;
    Some(ScoreComponent {
        signal: GhostSignal::DescriptionQuality,
        points: description.risk * facts.age_factor(config),
        indicators: description.indicators.clone(),
    })
}

fn salary_transparency(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let weights = &config.weights;
    if facts.text.salary.is_empty() {
        return if facts.is_old {
            fired(
                GhostSignal::SalaryTransparency,
                weights.salary_missing_old,
                "no salary after 30+ days",
            )
        } else {
            component(GhostSignal::SalaryTransparency, weights.salary_missing_fresh, None)
        };
    }

    let phrase = first_match(&facts.text.salary, &config.keywords.vague_salary)?;
    if facts.is_old {
        component(
            GhostSignal::SalaryTransparency,
            weights.salary_vague_old,
            Some(format!("vague salary ({phrase})")),
        )
    } else {
        component(GhostSignal::SalaryTransparency, weights.salary_vague_fresh, None)
    }
}

fn communication_delay(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let days = facts.date.days_old.unwrap_or(0);
    if facts.is_old && no_response(facts, config) && days >= config.thresholds.no_feedback_days {
        return fired(
            GhostSignal::CommunicationDelay,
            config.weights.communication_delay,
            "no employer response for 14+ days",
        );
    }
    None
}

fn requirement_anomaly(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let keywords = &config.keywords;
    if contains_any(&facts.text.title, &keywords.junior_title)
        && contains_any(&facts.text.description, &keywords.senior_requirement)
    {
        return fired(
            GhostSignal::RequirementAnomaly,
            config.weights.requirement_anomaly,
            "junior title with senior requirements",
        );
    }
    None
}

fn suspicious_company(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let keywords = &config.keywords;
    let keyword = first_keyword(
        &facts.text.company,
        &keywords.suspicious_company,
        keywords.whole_word_max_len,
    )?;
    component(
        GhostSignal::SuspiciousCompany,
        config.weights.suspicious_company,
        Some(format!("suspicious company name ({keyword})")),
    )
}

fn vague_title(_: &JobRecord, facts: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let terms = matches(&facts.text.title, &config.keywords.vague_title);
    if terms.is_empty() {
        return None;
    }
    let counted = terms.len().min(config.thresholds.vague_title_cap);
    Some(ScoreComponent {
        signal: GhostSignal::VagueTitle,
        points: counted as f32 * config.weights.vague_title_term,
        indicators: terms
            .iter()
            .map(|term| format!("vague title term ({term})"))
            .collect(),
    })
}

fn generic_location(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if !facts.is_old {
        return None;
    }
    let location = facts.text.location.as_str();
    let keywords = &config.keywords;
    let count = facts.applicant_count();
    let generic = location.is_empty() || keywords.generic_locations.iter().any(|l| l == location);
    let country_only =
        location.is_empty() || keywords.country_only_locations.iter().any(|l| l == location);

    if generic && count > config.thresholds.generic_location_applicants {
        fired(
            GhostSignal::GenericLocation,
            config.weights.generic_location,
            "generic location with high applicant count",
        )
    } else if country_only && count > config.thresholds.country_only_applicants {
        fired(
            GhostSignal::GenericLocation,
            config.weights.country_only_location,
            "country-only location with many applicants",
        )
    } else {
        None
    }
}

fn title_length(job: &JobRecord, _: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let length = char_len(job.title.trim());
    if length < config.thresholds.title_min_chars {
        fired(GhostSignal::TitleLength, config.weights.title_length, "unusually short title")
    } else if length > config.thresholds.title_max_chars {
        fired(GhostSignal::TitleLength, config.weights.title_length, "unusually long title")
    } else {
        None
    }
}

fn company_length(job: &JobRecord, _: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let company = job.company.trim();
    if company.is_empty() {
        return None;
    }
    let length = char_len(company);
    if length < config.thresholds.company_min_chars {
        fired(
            GhostSignal::CompanyLength,
            config.weights.company_length,
            "unusually short company name",
        )
    } else if length > config.thresholds.company_max_chars {
        fired(
            GhostSignal::CompanyLength,
            config.weights.company_length,
            "unusually long company name",
        )
    } else {
        None
    }
}

fn vague_applicant_status(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if facts.is_old
        && facts.applicants.count.is_none()
        && contains_any(&facts.text.applicants, &config.keywords.active_review)
    {
        return fired(
            GhostSignal::VagueApplicantStatus,
            config.weights.vague_applicant_status,
            "under active review without applicant count",
        );
    }
    None
}

fn missing_date(job: &JobRecord, _: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    if job.posted_date.trim().is_empty() {
        return fired(
            GhostSignal::MissingDate,
            config.weights.missing_date,
            "missing posting date",
        );
    }
    None
}

fn stale_without_applicants(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    let months = facts.date.months_old.unwrap_or(0.0);
    if facts.is_old && facts.text.applicants.is_empty() && months > config.thresholds.stale_months {
        return fired(
            GhostSignal::StaleWithoutApplicants,
            config.weights.stale_without_applicants,
            "stale posting without applicant info",
        );
    }
    None
}

fn invalid_link(job: &JobRecord, _: &JobFacts, config: &ScoringConfig) -> Option<ScoreComponent> {
    let link = job.link.trim();
    if link.is_empty() || !is_job_view_link(link) {
        return fired(
            GhostSignal::InvalidLink,
            config.weights.invalid_link,
            "missing or invalid job link",
        );
    }
    None
}

fn recruiter_promotion(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if facts.is_old
        && facts.applicant_count() >= config.thresholds.high_applicant_count
        && contains_any(&facts.text.recruiter, &config.keywords.recruiter_promotion)
    {
        return fired(
            GhostSignal::RecruiterPromotion,
            config.weights.recruiter_promotion,
            "promoted by recruiter despite high applicant count",
        );
    }
    None
}

fn open_application(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if !contains_any(&facts.text.status, &config.keywords.open_application_status) {
        return None;
    }
    let points = if facts.is_old {
        config.weights.open_application_old
    } else {
        config.weights.open_application_fresh
    };
    fired(GhostSignal::OpenApplication, points, "open application posting")
}

fn repeat_listing(
    _: &JobRecord,
    facts: &JobFacts,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if facts.is_old && contains_any(&facts.text.status, &config.keywords.repeat_listing_status) {
        return fired(
            GhostSignal::RepeatListing,
            config.weights.repeat_listing,
            "repeat listing",
        );
    }
    None
}
