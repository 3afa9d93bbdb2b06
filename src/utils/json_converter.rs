use serde_json::Value;

/// Render a JSON scalar the way it goes into a query string.
/// Arrays, objects and `null` have no single query value and give `None`.
pub fn scalar_to_query_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(scalar_to_query_value(&json!("x")).as_deref(), Some("x"));
        assert_eq!(scalar_to_query_value(&json!(32)).as_deref(), Some("32"));
        assert_eq!(scalar_to_query_value(&json!(50.5)).as_deref(), Some("50.5"));
        assert_eq!(scalar_to_query_value(&json!(true)).as_deref(), Some("true"));
    }

    #[test]
    fn test_non_scalars_have_no_query_value() {
        assert_eq!(scalar_to_query_value(&json!(null)), None);
        assert_eq!(scalar_to_query_value(&json!(["Debian", "Ubuntu"])), None);
        assert_eq!(scalar_to_query_value(&json!({"k": "v"})), None);
    }
}
