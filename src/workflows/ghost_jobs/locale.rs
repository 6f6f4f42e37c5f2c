use super::domain::JobRecord;
use super::evaluation::LocaleFilterConfig;
use super::text::{contains_keyword, lower};

/// Region AND domain keyword gate. Independent of ghost scoring.
#[derive(Debug, Clone)]
pub struct LocaleDomainFilter {
    config: LocaleFilterConfig,
}

impl LocaleDomainFilter {
    pub fn new(config: LocaleFilterConfig) -> Self {
        Self { config }
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Reason string when the job matches both the region and the domain, `None` otherwise.
    pub fn matches(&self, job: &JobRecord) -> Option<String> {
        let title = lower(&job.title);
        if title.is_empty() {
            return None;
        }

        let location = lower(&job.location);
        if !self.matches_region(&location) {
            return None;
        }

        let subject = format!("{title} {}", lower(&job.company));
        let short = self.config.whole_word_max_len;
        let domain = self
            .config
            .domain_keywords
            .iter()
            .any(|keyword| contains_keyword(&subject, keyword, short));
        if !domain {
            return None;
        }

        Some(format!("{} ({})", self.config.label, job.location.trim()))
    }

    fn matches_region(&self, location: &str) -> bool {
        if location.is_empty() {
            return false;
        }
        let short = self.config.whole_word_max_len;
        if self
            .config
            .region_keywords
            .iter()
            .any(|keyword| contains_keyword(location, keyword, short))
        {
            return true;
        }

        location
            .split(|c: char| !(c.is_alphanumeric() || c == '-'))
            .any(|token| self.is_region_code(token))
    }

    // `tr` or a numbered subdivision such as `tr-34`.
    fn is_region_code(&self, token: &str) -> bool {
        self.config.region_codes.iter().any(|code| {
            token == code
                || token
                    .strip_prefix(code.as_str())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        })
    }
}

impl Default for LocaleDomainFilter {
    fn default() -> Self {
        Self::new(LocaleFilterConfig::default())
    }
}
