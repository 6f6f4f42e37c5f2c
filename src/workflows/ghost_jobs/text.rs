//! Keyword matching over lowercased posting text.

pub(crate) fn lower(value: &str) -> String {
    value.trim().to_lowercase()
}

/// First keyword contained in `haystack`, in table order.
pub(crate) fn first_match<'a>(haystack: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| !keyword.is_empty() && haystack.contains(keyword))
}

pub(crate) fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    first_match(haystack, keywords).is_some()
}

/// Every keyword contained in `haystack`, without repeats.
pub(crate) fn matches<'a>(haystack: &str, keywords: &'a [String]) -> Vec<&'a str> {
    let mut found: Vec<&str> = Vec::new();
    for keyword in keywords {
        if !keyword.is_empty() && haystack.contains(keyword.as_str()) && !found.contains(&keyword.as_str()) {
            found.push(keyword);
        }
    }
    found
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Matches `keyword` as a whole token when it is short, as a substring otherwise.
pub(crate) fn contains_keyword(haystack: &str, keyword: &str, whole_word_max_len: usize) -> bool {
    if keyword.is_empty() {
        return false;
    }
    if char_len(keyword) > whole_word_max_len {
        return haystack.contains(keyword);
    }
    haystack
        .match_indices(keyword)
        .any(|(start, matched)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + matched.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
}

/// First keyword found by [`contains_keyword`], in table order.
pub(crate) fn first_keyword<'a>(
    haystack: &str,
    keywords: &'a [String],
    whole_word_max_len: usize,
) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| contains_keyword(haystack, keyword, whole_word_max_len))
}

pub(crate) fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn first_match_respects_table_order() {
        let keywords = table(&["staffing", "talent", "hr"]);
        assert_eq!(
            first_match("global talent staffing", &keywords),
            Some("staffing")
        );
        assert_eq!(first_match("acme", &keywords), None);
    }

    #[test]
    fn matches_are_distinct() {
        let keywords = table(&["genel", "genel", "esnek"]);
        assert_eq!(matches("genel genel esnek", &keywords), vec!["genel", "esnek"]);
    }

    #[test]
    fn short_keywords_require_word_boundaries() {
        assert!(contains_keyword("senior it specialist", "it", 3));
        assert!(!contains_keyword("digital marketing", "it", 3));
        assert!(contains_keyword("data-ai team", "ai", 3));
        assert!(contains_keyword("digital marketing", "marketing", 3));
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(3.25), 3.3);
        assert_eq!(round1(2.04), 2.0);
    }
}
