use serde::{Deserialize, Serialize};

/// Complete scoring rubric injected into the engine.
///
/// Every table can be overridden from TOML; keys that are left out keep the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    pub thresholds: ScoringThresholds,
    pub weights: SignalWeights,
    pub rubric: RubricConfig,
    pub keywords: KeywordTables,
    pub locale: LocaleFilterConfig,
}

impl ScoringConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Lower bound of a risk band (inclusive) and the risk it assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBand {
    pub min: u32,
    pub risk: u8,
}

/// Risk of the highest band whose lower bound `value` reaches; zero below every band.
pub fn band_risk(bands: &[RiskBand], value: u32) -> u8 {
    reached_band(bands, value).map(|band| band.risk).unwrap_or(0)
}

/// Highest band whose lower bound `value` reaches.
pub fn reached_band(bands: &[RiskBand], value: u32) -> Option<&RiskBand> {
    bands
        .iter()
        .filter(|band| value >= band.min)
        .max_by_key(|band| band.min)
}

/// Number of risk-carrying bands `value` has reached; bands sharing a lower bound count once.
pub fn band_rank(bands: &[RiskBand], value: u32) -> usize {
    let mut reached: Vec<u32> = bands
        .iter()
        .filter(|band| band.risk > 0)
        .map(|band| band.min)
        .filter(|min| value >= *min)
        .collect();
    reached.sort_unstable();
    reached.dedup();
    reached.len()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    pub old_posting_days: u32,
    pub fresh_dampening: f32,
    pub ghost_threshold_old: f32,
    pub ghost_threshold_fresh: f32,
    pub flag_threshold: f32,
    pub score_ceiling: f32,
    pub age_bands: Vec<RiskBand>,
    pub year_risk: u8,
    pub applicant_bands: Vec<RiskBand>,
    pub high_applicant_count: u32,
    pub no_feedback_days: u32,
    pub stale_months: f32,
    pub generic_location_applicants: u32,
    pub country_only_applicants: u32,
    pub description_min_chars: usize,
    pub description_risk_cap: f32,
    pub overly_generic_phrase_count: usize,
    pub broad_scope_family_count: usize,
    pub vague_title_cap: usize,
    pub title_min_chars: usize,
    pub title_max_chars: usize,
    pub company_min_chars: usize,
    pub company_max_chars: usize,
    pub duration_medium_max_days: u32,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            old_posting_days: 30,
            fresh_dampening: 0.5,
            ghost_threshold_old: 3.0,
            ghost_threshold_fresh: 4.0,
            flag_threshold: 3.0,
            score_ceiling: 10.0,
            age_bands: vec![
                RiskBand { min: 30, risk: 1 },
                RiskBand { min: 60, risk: 3 },
                RiskBand { min: 90, risk: 5 },
            ],
            year_risk: 5,
            applicant_bands: vec![
                RiskBand { min: 50, risk: 2 },
                RiskBand { min: 100, risk: 3 },
                RiskBand { min: 200, risk: 5 },
            ],
            high_applicant_count: 100,
            no_feedback_days: 14,
            stale_months: 3.0,
            generic_location_applicants: 100,
            country_only_applicants: 50,
            description_min_chars: 50,
            description_risk_cap: 3.0,
            overly_generic_phrase_count: 3,
            broad_scope_family_count: 3,
            vague_title_cap: 3,
            title_min_chars: 10,
            title_max_chars: 100,
            company_min_chars: 3,
            company_max_chars: 80,
            duration_medium_max_days: 60,
        }
    }
}

/// Points contributed by the individual risk-path evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub repost_combo: f32,
    pub no_movement: f32,
    pub salary_missing_old: f32,
    pub salary_missing_fresh: f32,
    pub salary_vague_old: f32,
    pub salary_vague_fresh: f32,
    pub communication_delay: f32,
    pub requirement_anomaly: f32,
    pub suspicious_company: f32,
    pub vague_title_term: f32,
    pub generic_location: f32,
    pub country_only_location: f32,
    pub title_length: f32,
    pub company_length: f32,
    pub vague_applicant_status: f32,
    pub missing_date: f32,
    pub stale_without_applicants: f32,
    pub invalid_link: f32,
    pub recruiter_promotion: f32,
    pub open_application_old: f32,
    pub open_application_fresh: f32,
    pub repeat_listing: f32,
    pub description: DescriptionWeights,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            repost_combo: 3.0,
            no_movement: 1.0,
            salary_missing_old: 2.0,
            salary_missing_fresh: 0.5,
            salary_vague_old: 1.0,
            salary_vague_fresh: 0.5,
            communication_delay: 1.0,
            requirement_anomaly: 2.0,
            suspicious_company: 2.0,
            vague_title_term: 1.0,
            generic_location: 1.0,
            country_only_location: 1.0,
            title_length: 1.0,
            company_length: 1.0,
            vague_applicant_status: 1.0,
            missing_date: 1.0,
            stale_without_applicants: 1.0,
            invalid_link: 1.0,
            recruiter_promotion: 1.0,
            open_application_old: 2.5,
            open_application_fresh: 1.0,
            repeat_listing: 1.5,
            description: DescriptionWeights::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionWeights {
    pub too_short: f32,
    pub overly_generic: f32,
    pub vague_phrases: f32,
    pub broad_scope: f32,
    pub seniority_mismatch: f32,
    pub excessive_experience: f32,
    pub boilerplate_only: f32,
}

impl Default for DescriptionWeights {
    fn default() -> Self {
        Self {
            too_short: 2.0,
            overly_generic: 2.0,
            vague_phrases: 1.0,
            broad_scope: 2.0,
            seniority_mismatch: 1.0,
            excessive_experience: 2.0,
            boilerplate_only: 1.0,
        }
    }
}

/// Fixed-budget rubric behind `detailed_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub age_budget: f32,
    pub description_budget: f32,
    pub salary_budget: f32,
    pub no_movement_budget: f32,
    pub communication_budget: f32,
    pub requirement_budget: f32,
    pub posting_status_budget: f32,
    /// Points for the third and any later age band reached.
    pub age_over_90: f32,
    /// Points for the second age band.
    pub age_over_60: f32,
    /// Points for the first age band.
    pub age_over_30: f32,
    pub age_missing_date: f32,
    pub description_short_chars: usize,
    pub description_medium_chars: usize,
    pub description_missing: f32,
    pub description_short: f32,
    pub description_medium: f32,
    pub description_overly_generic: f32,
    pub description_vague: f32,
    pub salary_missing_old: f32,
    pub salary_missing_fresh: f32,
    pub salary_vague_old: f32,
    pub salary_vague_fresh: f32,
    pub high_applicants_silent: f32,
    pub high_applicants_responsive: f32,
    pub communication_delay: f32,
    pub requirement_anomaly: f32,
    pub repost_old: f32,
    pub open_application_old: f32,
    pub open_application_fresh: f32,
    pub repeat_listing_old: f32,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            age_budget: 2.0,
            description_budget: 2.5,
            salary_budget: 2.0,
            no_movement_budget: 1.5,
            communication_budget: 1.0,
            requirement_budget: 1.0,
            posting_status_budget: 2.0,
            age_over_90: 2.0,
            age_over_60: 1.5,
            age_over_30: 1.0,
            age_missing_date: 1.5,
            description_short_chars: 200,
            description_medium_chars: 500,
            description_missing: 2.5,
            description_short: 2.5,
            description_medium: 1.5,
            description_overly_generic: 2.0,
            description_vague: 1.0,
            salary_missing_old: 2.0,
            salary_missing_fresh: 0.5,
            salary_vague_old: 1.0,
            salary_vague_fresh: 0.5,
            high_applicants_silent: 1.5,
            high_applicants_responsive: 0.5,
            communication_delay: 1.0,
            requirement_anomaly: 1.0,
            repost_old: 2.0,
            open_application_old: 1.5,
            open_application_fresh: 0.5,
            repeat_listing_old: 1.0,
        }
    }
}

/// Named keyword set, evaluated in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFamily {
    pub name: String,
    pub keywords: Vec<String>,
}

impl KeywordFamily {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: words(keywords),
        }
    }
}

/// Keyword tables consulted by parsers and evaluators. All entries are lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub date_sentinels: Vec<String>,
    pub recent_phrases: Vec<String>,
    pub applicant_sentinels: Vec<String>,
    pub repost_status: Vec<String>,
    pub open_application_status: Vec<String>,
    pub repeat_listing_status: Vec<String>,
    pub no_response_insight: Vec<String>,
    pub recruiter_promotion: Vec<String>,
    pub active_review: Vec<String>,
    pub vague_salary: Vec<String>,
    pub rubric_vague_salary: Vec<String>,
    pub suspicious_company: Vec<String>,
    pub vague_title: Vec<String>,
    pub junior_title: Vec<String>,
    pub senior_requirement: Vec<String>,
    pub rubric_senior_requirement: Vec<String>,
    pub generic_locations: Vec<String>,
    pub country_only_locations: Vec<String>,
    pub rubric_vague_phrases: Vec<String>,
    pub parameter_vague_phrases: Vec<String>,
    pub description: DescriptionKeywords,
    /// Company keywords up to this many characters (such as `hr`) match whole words only.
    pub whole_word_max_len: usize,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            date_sentinels: words(&["", "unknown", "n/a", "bilinmiyor", "tarih bulunamadı"]),
            recent_phrases: words(&["just now", "now", "recently", "az önce", "yeni"]),
            applicant_sentinels: words(&["", "unknown", "n/a", "bilinmiyor"]),
            repost_status: words(&[
                "reposted",
                "renewed",
                "yeniden yayınlandı",
                "ilan yenilendi",
            ]),
            open_application_status: words(&[
                "open application",
                "general application",
                "genel başvuru",
                "sürekli alıyoruz",
            ]),
            repeat_listing_status: words(&["repeat", "tekrarlanan yayın"]),
            no_response_insight: words(&["no response insight", "henüz yanıt içgörüsü yok"]),
            recruiter_promotion: words(&["promoted", "tanıtılıyor"]),
            active_review: words(&[
                "actively reviewing",
                "under active review",
                "aktif olarak inceleniyor",
            ]),
            vague_salary: words(&[
                "competitive",
                "negotiable",
                "rekabetçi",
                "uygun",
                "görüşülür",
                "belirlenecek",
            ]),
            rubric_vague_salary: words(&[
                "competitive",
                "negotiable",
                "rekabetçi",
                "görüşülür",
                "belirlenecek",
            ]),
            suspicious_company: words(&[
                "recruiting",
                "staffing",
                "talent",
                "hr",
                "human resources",
                "headhunter",
                "executive search",
                "placement",
                "consulting",
            ]),
            vague_title: words(&[
                "various",
                "multiple",
                "various positions",
                "çeşitli",
                "birden fazla",
                "urgent",
                "immediate",
                "acil",
                "hemen",
                "entry level",
                "junior",
            ]),
            junior_title: words(&["junior", "entry", "başlangıç", "yeni mezun", "stajyer"]),
            senior_requirement: words(&[
                "5 years", "10 years", "5 yıl", "10 yıl", "15 yıl", "senior", "kıdemli",
            ]),
            rubric_senior_requirement: words(&[
                "5 years",
                "10 years",
                "5 yıl",
                "10 yıl",
                "15 yıl",
                "senior",
                "kıdemli",
                "deneyimli",
            ]),
            generic_locations: words(&[
                "remote",
                "uzaktan",
                "anywhere",
                "worldwide",
                "türkiye",
                "turkey",
            ]),
            country_only_locations: words(&["türkiye", "turkey"]),
            rubric_vague_phrases: words(&[
                "genel",
                "çeşitli",
                "farklı",
                "various",
                "multiple",
                "dinamik ekip",
                "her şeyi yapabilen",
            ]),
            parameter_vague_phrases: words(&[
                "genel",
                "çeşitli",
                "various",
                "multiple",
                "dinamik ekip",
            ]),
            description: DescriptionKeywords::default(),
            whole_word_max_len: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionKeywords {
    pub vague_phrases: Vec<String>,
    pub role_families: Vec<KeywordFamily>,
    pub seniority_levels: Vec<KeywordFamily>,
    pub junior_markers: Vec<String>,
    pub senior_markers: Vec<String>,
    pub experience_phrases: Vec<String>,
    pub boilerplate_phrases: Vec<String>,
    pub specific_info_terms: Vec<String>,
}

impl Default for DescriptionKeywords {
    fn default() -> Self {
        Self {
            vague_phrases: words(&[
                "various",
                "multiple",
                "general",
                "flexible",
                "versatile",
                "dinamik ekip",
                "dinamik çalışma ortamı",
                "her şeyi yapabilen",
                "çok yönlü",
                "esnek",
                "genel",
                "çeşitli görevler",
                "farklı projeler",
                "her türlü",
                "tüm",
                "genel olarak",
                "çeşitli",
                "farklı",
            ]),
            role_families: vec![
                KeywordFamily::new(
                    "technical",
                    &[
                        "software",
                        "code",
                        "development",
                        "yazılım",
                        "kod",
                        "programlama",
                        "geliştirme",
                        "teknik",
                    ],
                ),
                KeywordFamily::new(
                    "administrative",
                    &[
                        "administrative",
                        "management",
                        "idari",
                        "yönetim",
                        "raporlama",
                        "planlama",
                    ],
                ),
                KeywordFamily::new(
                    "customer",
                    &[
                        "customer",
                        "sales",
                        "marketing",
                        "müşteri",
                        "satış",
                        "pazarlama",
                    ],
                ),
                KeywordFamily::new(
                    "financial",
                    &[
                        "accounting",
                        "finance",
                        "financial",
                        "muhasebe",
                        "finans",
                        "mali",
                    ],
                ),
            ],
            seniority_levels: vec![
                KeywordFamily::new(
                    "senior",
                    &["senior", "lead", "principal", "architect", "kıdemli"],
                ),
                KeywordFamily::new(
                    "junior",
                    &["junior", "entry", "başlangıç", "yeni mezun", "stajyer"],
                ),
                KeywordFamily::new(
                    "manager",
                    &["manager", "head", "director", "yönetici", "müdür"],
                ),
                KeywordFamily::new("specialist", &["specialist", "analyst", "uzman", "analist"]),
            ],
            junior_markers: words(&["junior", "entry level", "yeni mezun", "başlangıç"]),
            senior_markers: words(&["senior", "kıdemli", "5 yıl", "10 yıl", "deneyimli"]),
            experience_phrases: words(&["5 years", "10 years", "5 yıl", "10 yıl", "15 yıl"]),
            boilerplate_phrases: words(&[
                "competitive salary",
                "dynamic team",
                "rekabetçi maaş",
                "dinamik ekip",
                "uygun maaş",
            ]),
            specific_info_terms: words(&[
                "salary",
                "team",
                "manager",
                "supervisor",
                "maaş",
                "ücret",
                "ekip",
                "yönetici",
            ]),
        }
    }
}

/// Region + domain keyword gate, independent from ghost scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleFilterConfig {
    pub label: String,
    pub region_keywords: Vec<String>,
    pub region_codes: Vec<String>,
    pub domain_keywords: Vec<String>,
    pub whole_word_max_len: usize,
}

impl Default for LocaleFilterConfig {
    fn default() -> Self {
        Self {
            label: "Turkey IT".to_string(),
            region_keywords: words(&[
                "turkey",
                "türkiye",
                "istanbul",
                "ankara",
                "izmir",
                "bursa",
                "antalya",
                "adana",
                "gaziantep",
                "konya",
                "kayseri",
                "mersin",
                "eskisehir",
                "remote turkey",
                "türkiye remote",
                "istanbul remote",
                "ankara remote",
            ]),
            region_codes: words(&["tr"]),
            domain_keywords: words(&[
                "it",
                "software",
                "yazılım",
                "developer",
                "geliştirici",
                "engineer",
                "mühendis",
                "devops",
                "cloud",
                "aws",
                "azure",
                "gcp",
                "docker",
                "kubernetes",
                "k8s",
                "python",
                "java",
                "javascript",
                "react",
                "angular",
                "node.js",
                "system administrator",
                "database",
                "dba",
                "security",
                "cybersecurity",
                "data engineer",
                "data scientist",
                "machine learning",
                "ai",
            ]),
            whole_word_max_len: 3,
        }
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_risk_picks_highest_reached_band() {
        let bands = ScoringThresholds::default().age_bands;
        assert_eq!(band_risk(&bands, 0), 0);
        assert_eq!(band_risk(&bands, 29), 0);
        assert_eq!(band_risk(&bands, 30), 1);
        assert_eq!(band_risk(&bands, 59), 1);
        assert_eq!(band_risk(&bands, 60), 3);
        assert_eq!(band_risk(&bands, 89), 3);
        assert_eq!(band_risk(&bands, 90), 5);
        assert_eq!(band_risk(&bands, 4000), 5);
    }

    #[test]
    fn band_rank_counts_reached_risk_bands() {
        let bands = ScoringThresholds::default().age_bands;
        assert_eq!(band_rank(&bands, 29), 0);
        assert_eq!(band_rank(&bands, 30), 1);
        assert_eq!(band_rank(&bands, 60), 2);
        assert_eq!(band_rank(&bands, 400), 3);

        let with_floor = vec![
            RiskBand { min: 0, risk: 0 },
            RiskBand { min: 40, risk: 3 },
            RiskBand { min: 14, risk: 1 },
        ];
        assert_eq!(band_rank(&with_floor, 5), 0);
        assert_eq!(band_rank(&with_floor, 45), 2);
        assert_eq!(reached_band(&with_floor, 20).map(|band| band.min), Some(14));
    }

    #[test]
    fn band_risk_ignores_declaration_order() {
        let bands = vec![
            RiskBand { min: 200, risk: 5 },
            RiskBand { min: 50, risk: 2 },
            RiskBand { min: 100, risk: 3 },
        ];
        assert_eq!(band_risk(&bands, 150), 3);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ScoringConfig::from_toml_str(
            r#"
            [thresholds]
            ghost_threshold_old = 2.5

            [keywords]
            suspicious_company = ["agency"]
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.thresholds.ghost_threshold_old, 2.5);
        assert_eq!(config.thresholds.ghost_threshold_fresh, 4.0);
        assert_eq!(config.keywords.suspicious_company, vec!["agency"]);
        assert_eq!(
            config.keywords.vague_title,
            KeywordTables::default().vague_title
        );
        assert_eq!(config.weights, SignalWeights::default());
    }

    #[test]
    fn role_families_can_be_replaced_from_toml() {
        let config = ScoringConfig::from_toml_str(
            r#"
            [[keywords.description.role_families]]
            name = "logistics"
            keywords = ["warehouse", "forklift"]
            "#,
        )
        .expect("valid toml");

        let families = &config.keywords.description.role_families;
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].name, "logistics");
        assert!(!config.keywords.description.vague_phrases.is_empty());
    }
}
