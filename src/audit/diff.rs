//! Field-level diffs for audit entries

use serde_json::Value;

const MAX_STRING_CHARS: usize = 50;

/// Describe what changed between two JSON values
///
/// Objects are compared one level deep; `None` means nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"amount": 10, "category": "Food"});
        assert_eq!(generate_diff(&v, &v), None);
    }

    #[test]
    fn test_changed_field() {
        let before = json!({"amount": 10, "category": "Food"});
        let after = json!({"amount": 12.5, "category": "Food"});
        assert_eq!(
            generate_diff(&before, &after),
            Some("amount: 10 -> 12.5".to_string())
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"description": "lunch"});
        let after = json!({"name": "Cafe"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("description: \"lunch\" -> (removed)"));
        assert!(diff.contains("name: (added) -> \"Cafe\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)), Some("1 -> 2".to_string()));
        assert_eq!(generate_diff(&json!(null), &json!(null)), None);
    }

    #[test]
    fn test_long_multibyte_string_is_truncated() {
        let long = "é".repeat(80);
        let diff = generate_diff(&json!({"d": long}), &json!({"d": "x"})).unwrap();
        assert!(diff.contains("...\""));
    }
}
