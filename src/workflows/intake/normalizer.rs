use serde_json::Value;

const INVISIBLE: [char; 3] = ['\u{feff}', '\u{200b}', '\u{200c}'];

/// Text form of a scraped field: `null` and containers collapse to empty, scalars are stringified.
pub(crate) fn normalize_field(value: &Value) -> String {
    match value {
        Value::String(text) => normalize_text(text),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub(crate) fn normalize_text(value: &str) -> String {
    value.replace(INVISIBLE, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_invisible_characters_and_surrounding_space() {
        assert_eq!(
            normalize_field(&json!("\u{feff} 3 weeks ago\u{200b} ")),
            "3 weeks ago"
        );
    }

    #[test]
    fn scalars_become_text_and_null_becomes_empty() {
        assert_eq!(normalize_field(&json!(150)), "150");
        assert_eq!(normalize_field(&json!(true)), "true");
        assert_eq!(normalize_field(&Value::Null), "");
        assert_eq!(normalize_field(&json!(["a"])), "");
    }
}
