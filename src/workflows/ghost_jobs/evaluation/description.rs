use super::super::domain::{DescriptionFact, DescriptionFinding};
use super::super::text::{char_len, contains_any, lower, matches};
use super::config::{KeywordFamily, ScoringConfig};

/// Judges description quality against the title; the returned risk is capped.
pub fn analyze_description(description: &str, title: &str, config: &ScoringConfig) -> DescriptionFact {
    let weights = &config.weights.description;
    let thresholds = &config.thresholds;
    let keywords = &config.keywords.description;
    let mut fact = DescriptionFact::default();

    if char_len(description.trim()) < thresholds.description_min_chars {
        fact.risk = weights.too_short.min(thresholds.description_risk_cap);
        fact.indicators.push("description too short".to_string());
        fact.findings.push(DescriptionFinding::TooShort);
        return fact;
    }

    let text = lower(description);
    let title = lower(title);
    let mut risk = 0.0_f32;

    let vague = matches(&text, &keywords.vague_phrases);
    if vague.len() >= thresholds.overly_generic_phrase_count {
        risk += weights.overly_generic;
        fact.indicators
            .push(format!("overly generic description ({} vague phrases)", vague.len()));
        fact.findings.push(DescriptionFinding::OverlyGeneric);
    } else if !vague.is_empty() {
        risk += weights.vague_phrases;
        fact.indicators
            .push(format!("vague description phrases: {}", vague.join(", ")));
        fact.findings.push(DescriptionFinding::VaguePhrases);
    }

    let families: Vec<&str> = keywords
        .role_families
        .iter()
        .filter(|family| contains_any(&text, &family.keywords))
        .map(|family| family.name.as_str())
        .collect();
    if families.len() >= thresholds.broad_scope_family_count {
        risk += weights.broad_scope;
        fact.indicators
            .push(format!("too broad scope ({})", families.join(", ")));
        fact.findings.push(DescriptionFinding::BroadScope);
    }

    let level = title_level(&title, &keywords.seniority_levels);
    if level == Some("senior") && contains_any(&text, &keywords.junior_markers) {
        risk += weights.seniority_mismatch;
        fact.indicators
            .push("senior title with junior-level description".to_string());
        fact.findings
            .push(DescriptionFinding::SeniorTitleJuniorDescription);
    } else if level == Some("junior") && contains_any(&text, &keywords.senior_markers) {
        risk += weights.seniority_mismatch;
        fact.indicators
            .push("junior title with senior-level description".to_string());
        fact.findings
            .push(DescriptionFinding::JuniorTitleSeniorDescription);
    }

    let junior_role = level == Some("junior") || contains_any(&title, &config.keywords.junior_title);
    if junior_role && contains_any(&text, &keywords.experience_phrases) {
        risk += weights.excessive_experience;
        fact.indicators
            .push("excessive experience required for junior role".to_string());
        fact.findings.push(DescriptionFinding::ExcessiveExperience);
    }

    if boilerplate_only(&text, &keywords.boilerplate_phrases, &keywords.specific_info_terms) {
        risk += weights.boilerplate_only;
        fact.indicators
            .push("boilerplate perks without concrete details".to_string());
        fact.findings.push(DescriptionFinding::BoilerplateOnly);
    }

    fact.risk = risk.min(thresholds.description_risk_cap);
    fact
}

fn title_level<'a>(title: &str, levels: &'a [KeywordFamily]) -> Option<&'a str> {
    levels
        .iter()
        .find(|level| contains_any(title, &level.keywords))
        .map(|level| level.name.as_str())
}

// Specific terms are looked up after the boilerplate itself is removed, since every
// boilerplate phrase already names a salary or team.
fn boilerplate_only(text: &str, boilerplate: &[String], specific: &[String]) -> bool {
    let found = matches(text, boilerplate);
    if found.is_empty() {
        return false;
    }
    let remainder = found
        .iter()
        .fold(text.to_string(), |acc, phrase| acc.replace(phrase, " "));
    !contains_any(&remainder, specific)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLER: &str = "We build payment rails for merchants across Europe and ship weekly releases.";

    fn analyze(description: &str, title: &str) -> DescriptionFact {
        analyze_description(description, title, &ScoringConfig::default())
    }

    #[test]
    fn short_descriptions_stop_after_length_check() {
        let fact = analyze("Various tasks. Junior needed.", "Senior Engineer");
        assert_eq!(fact.risk, 2.0);
        assert_eq!(fact.findings, vec![DescriptionFinding::TooShort]);
        assert_eq!(fact.indicators, vec!["description too short"]);
    }

    #[test]
    fn specific_description_is_clean() {
        let fact = analyze(FILLER, "Backend Developer");
        assert_eq!(fact.risk, 0.0);
        assert!(fact.indicators.is_empty());
    }

    #[test]
    fn vague_phrase_tiers() {
        let one = analyze(&format!("{FILLER} Flexible hours."), "Backend Developer");
        assert!(one.has(DescriptionFinding::VaguePhrases));
        assert_eq!(one.risk, 1.0);

        let many = analyze(
            &format!("{FILLER} Various duties, multiple projects, flexible hours."),
            "Backend Developer",
        );
        assert!(many.has(DescriptionFinding::OverlyGeneric));
        assert!(!many.has(DescriptionFinding::VaguePhrases));
        assert_eq!(many.risk, 2.0);
    }

    #[test]
    fn broad_scope_needs_three_role_families() {
        let fact = analyze(
            "You will write software, handle customer calls, and keep the accounting books tidy every month.",
            "Office Associate",
        );
        assert!(fact.has(DescriptionFinding::BroadScope));
        assert_eq!(fact.risk, 2.0);
    }

    #[test]
    fn junior_title_with_senior_requirements() {
        let fact = analyze(
            "Looking for a candidate with 5 years of production experience in distributed systems.",
            "Junior Developer",
        );
        assert!(fact.has(DescriptionFinding::ExcessiveExperience));
        assert_eq!(fact.risk, 2.0);

        let mismatch = analyze(
            "Kıdemli ekip arkadaşlarımızla birlikte ödeme altyapımızı geliştireceksiniz, haftalık sürüm çıkıyoruz.",
            "Junior Developer",
        );
        assert!(mismatch.has(DescriptionFinding::JuniorTitleSeniorDescription));
    }

    #[test]
    fn senior_title_with_junior_description() {
        let fact = analyze(
            "This is an entry level opening where you will learn our payment stack from scratch.",
            "Senior Platform Engineer",
        );
        assert!(fact.has(DescriptionFinding::SeniorTitleJuniorDescription));
        assert_eq!(fact.risk, 1.0);
    }

    #[test]
    fn boilerplate_without_specifics() {
        let fact = analyze(
            "Join our dynamic team! We offer a competitive salary and great snacks in the office.",
            "Backend Developer",
        );
        assert!(fact.has(DescriptionFinding::BoilerplateOnly));

        let specific = analyze(
            "Join our dynamic team! Salary band is published and you report to the engineering manager.",
            "Backend Developer",
        );
        assert!(!specific.has(DescriptionFinding::BoilerplateOnly));
    }

    #[test]
    fn risk_is_capped() {
        let fact = analyze(
            "Various multiple general duties: software code, customer sales, accounting, management. 5 years required.",
            "Junior Analyst",
        );
        assert!(fact.findings.len() >= 3);
        assert_eq!(fact.risk, 3.0);
    }
}
