use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{ApplicantFact, DateFact};
use super::evaluation::config::{band_risk, ScoringConfig};
use super::text::{contains_keyword, lower, round1};

static MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:month|ay|mo)").expect("month pattern compiles"));
static WEEKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:week|hafta|w)").expect("week pattern compiles"));
static DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:day|gün|d)").expect("day pattern compiles"));
static YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:year|yıl|yr)").expect("year pattern compiles"));
static AT_LEAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*\+").expect("at-least pattern compiles"));
static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)").expect("number pattern compiles"));

fn captured_number(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Normalizes posting-age text such as `3 weeks ago` or `2 ay önce`.
pub fn parse_age(posted_date: &str, config: &ScoringConfig) -> DateFact {
    let text = lower(posted_date);
    let keywords = &config.keywords;

    if keywords.date_sentinels.iter().any(|sentinel| *sentinel == text) {
        return DateFact::unresolved(posted_date);
    }

    let bands = &config.thresholds.age_bands;
    let resolved = |days: u32, months: f32| DateFact {
        days_old: Some(days),
        months_old: Some(months),
        age_risk: band_risk(bands, days),
        source_text: posted_date.to_string(),
    };

    if let Some(months) = captured_number(&MONTHS, &text) {
        return resolved(months.saturating_mul(30), months as f32);
    }
    if let Some(weeks) = captured_number(&WEEKS, &text) {
        let days = weeks.saturating_mul(7);
        return resolved(days, round1(days as f32 / 30.0));
    }
    if let Some(days) = captured_number(&DAYS, &text) {
        return resolved(days, round1(days as f32 / 30.0));
    }
    if let Some(years) = captured_number(&YEARS, &text) {
        let months = years.saturating_mul(12);
        return DateFact {
            days_old: Some(months.saturating_mul(30)),
            months_old: Some(months as f32),
            age_risk: config.thresholds.year_risk,
            source_text: posted_date.to_string(),
        };
    }

    // "Reposted just now", "Posted recently"; short phrases such as `now` need a whole word.
    if keywords
        .recent_phrases
        .iter()
        .any(|phrase| contains_keyword(&text, phrase, keywords.whole_word_max_len))
    {
        return resolved(0, 0.0);
    }

    DateFact::unresolved(posted_date)
}

/// Normalizes applicant counters such as `100+ applicants` or `Over 25 people clicked apply`.
pub fn parse_applicants(applicants: &str, config: &ScoringConfig) -> ApplicantFact {
    let text = lower(applicants);

    if config
        .keywords
        .applicant_sentinels
        .iter()
        .any(|sentinel| *sentinel == text)
    {
        return ApplicantFact::unresolved(applicants);
    }

    let count = captured_number(&AT_LEAST, &text).or_else(|| captured_number(&FIRST_NUMBER, &text));

    match count {
        Some(count) => ApplicantFact {
            count: Some(count),
            count_risk: band_risk(&config.thresholds.applicant_bands, count),
            source_text: applicants.to_string(),
        },
        None => ApplicantFact::unresolved(applicants),
    }
}
