use serde_json::Value;

/// Canonical display string for a report value.
///
/// Scalars print their literal text (strings unquoted); lists and mappings print
/// as indented JSON at any depth. Every section renderer goes through here.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Turns a snake_case key into a label: `total_revenue` -> `total revenue`.
pub fn humanize_label(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_literally() {
        assert_eq!(display_string(&json!("12%")), "12%");
        assert_eq!(display_string(&json!(42)), "42");
        assert_eq!(display_string(&json!(2.5)), "2.5");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&Value::Null), "null");
    }

    #[test]
    fn nested_values_render_as_indented_json_in_key_order() {
        let value = json!({"b": 1, "a": {"inner": [1, 2]}});
        assert_eq!(
            display_string(&value),
            "{\n  \"b\": 1,\n  \"a\": {\n    \"inner\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn labels_replace_every_underscore() {
        assert_eq!(humanize_label("avg_order_value"), "avg order value");
        assert_eq!(humanize_label("plain"), "plain");
    }
}
