use serde_json::Value;

use crate::profile::path::read;

/// Loose truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are all "not present".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a resolved value as plain text for a canonical position field.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns the first truthy value found under `aliases`, tried in order.
/// Alias order is a priority contract: the earliest alias wins.
pub fn resolve_field<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| read(record, &[*alias]))
        .find(|value| is_truthy(value))
}

/// [`resolve_field`] rendered as text, or `default` when no alias matched.
pub fn resolve_text(record: &Value, aliases: &[&str], default: &str) -> String {
    resolve_field(record, aliases)
        .map(to_text)
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        let falsy_values = [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ];
        for falsy in falsy_values {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        let truthy_values = [
            json!(true),
            json!(1),
            json!(-2.5),
            json!("x"),
            json!([0]),
            json!({"a": null}),
        ];
        for truthy in truthy_values {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!("Acme")), "Acme");
        assert_eq!(to_text(&json!(null)), "");
        assert_eq!(to_text(&json!(2020)), "2020");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&json!({"name": "Acme"})), r#"{"name":"Acme"}"#);
    }

    #[test]
    fn test_first_alias_wins() {
        let record = json!({"role": "C", "position": "B", "title": "A"});
        assert_eq!(resolve_text(&record, &["title", "position", "role"], "?"), "A");
        assert_eq!(resolve_text(&record, &["position", "title"], "?"), "B");
    }

    #[test]
    fn test_falsy_alias_is_skipped() {
        let record = json!({"title": "", "position": null, "role": "Designer"});
        assert_eq!(
            resolve_text(&record, &["title", "position", "role"], "Unknown Title"),
            "Designer"
        );
    }

    #[test]
    fn test_default_when_no_alias_matches() {
        let record = json!({"unrelated": "value"});
        assert_eq!(
            resolve_text(&record, &["title", "role"], "Unknown Title"),
            "Unknown Title"
        );
        assert_eq!(resolve_field(&record, &["title"]), None);
    }

    #[test]
    fn test_non_object_record_yields_default() {
        assert_eq!(resolve_text(&json!([1, 2]), &["title"], "fallback"), "fallback");
        assert_eq!(resolve_text(&json!(null), &["title"], ""), "");
    }

    #[test]
    fn test_numeric_field_is_stringified() {
        let record = json!({"start_date": 2019});
        assert_eq!(resolve_text(&record, &["start_date"], ""), "2019");
    }
}
