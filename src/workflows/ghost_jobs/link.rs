use once_cell::sync::Lazy;
use regex::Regex;

const JOB_VIEW_BASE: &str = "https://www.linkedin.com/jobs/view/";
const SITE_ORIGIN: &str = "https://www.linkedin.com";
const JOB_VIEW_MARKER: &str = "linkedin.com/jobs/view";

static EMBEDDED_ID: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"/jobs/view/(\d+)", r"currentJobId=(\d+)", r"jobId=(\d+)"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("job id pattern compiles"))
        .collect()
});

fn embedded_job_id(value: &str) -> Option<&str> {
    EMBEDDED_ID
        .iter()
        .find_map(|pattern| pattern.captures(value).and_then(|captures| captures.get(1)))
        .map(|id| id.as_str())
}

fn job_view_url(id: &str) -> String {
    format!("{JOB_VIEW_BASE}{id}/")
}

/// Rewrites a scraped job reference into the canonical job-view URL.
///
/// Accepts full URLs (with the id in the path or in a `currentJobId`/`jobId` query
/// parameter), bare numeric ids, and site-relative paths. Anything unrecognized is
/// returned trimmed but otherwise untouched.
pub fn canonicalize_link(value: &str) -> String {
    let link = value.trim();
    if link.is_empty() {
        return String::new();
    }

    if link.starts_with("http://") || link.starts_with("https://") {
        return embedded_job_id(link)
            .map(job_view_url)
            .unwrap_or_else(|| link.to_string());
    }

    if link.chars().all(|c| c.is_ascii_digit()) {
        return job_view_url(link);
    }

    if link.starts_with('/') {
        return embedded_job_id(link)
            .map(job_view_url)
            .unwrap_or_else(|| format!("{SITE_ORIGIN}{link}"));
    }

    link.to_string()
}

/// Whether `link` has the job-view shape the link evaluator expects.
pub fn is_job_view_link(link: &str) -> bool {
    link.contains(JOB_VIEW_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_becomes_job_view_url() {
        assert_eq!(
            canonicalize_link("1234567"),
            "https://www.linkedin.com/jobs/view/1234567/"
        );
    }

    #[test]
    fn canonical_url_is_unchanged() {
        let url = "https://www.linkedin.com/jobs/view/1234567/";
        assert_eq!(canonicalize_link(url), url);
        assert_eq!(canonicalize_link(&canonicalize_link(url)), url);
    }

    #[test]
    fn query_parameter_ids_are_extracted() {
        assert_eq!(
            canonicalize_link("https://www.linkedin.com/jobs/search/?currentJobId=1234567&geoId=1"),
            "https://www.linkedin.com/jobs/view/1234567/"
        );
        assert_eq!(
            canonicalize_link("https://www.linkedin.com/jobs/collections/?jobId=42"),
            "https://www.linkedin.com/jobs/view/42/"
        );
    }

    #[test]
    fn tracking_suffixes_are_dropped() {
        assert_eq!(
            canonicalize_link("https://tr.linkedin.com/jobs/view/98765?refId=abc&trk=x"),
            "https://www.linkedin.com/jobs/view/98765/"
        );
    }

    #[test]
    fn relative_paths_are_anchored_to_the_site() {
        assert_eq!(
            canonicalize_link("/jobs/view/555/?trk=feed"),
            "https://www.linkedin.com/jobs/view/555/"
        );
        assert_eq!(
            canonicalize_link("/company/acme"),
            "https://www.linkedin.com/company/acme"
        );
    }

    #[test]
    fn unrecognized_values_pass_through() {
        assert_eq!(canonicalize_link("   "), "");
        assert_eq!(canonicalize_link("https://example.com/careers"), "https://example.com/careers");
        assert_eq!(canonicalize_link("job-123"), "job-123");
    }

    #[test]
    fn job_view_shape() {
        assert!(is_job_view_link("https://www.linkedin.com/jobs/view/1/"));
        assert!(!is_job_view_link("https://example.com/jobs/view/1/"));
        assert!(!is_job_view_link(""));
    }
}
