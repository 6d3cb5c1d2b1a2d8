use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a loosely-typed JSON scalar as a string. Numbers keep their
/// textual form, null and non-scalars yield `None`.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize a field the source document may encode as a string or a number
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

/// Deserialize a list whose entries may be strings or numbers
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(value.map(|items| items.into_iter().filter_map(scalar_to_string).collect()))
}

/// Treat whitespace-only strings as absent
#[inline]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_string")]
        id: Option<String>,
        #[serde(default, deserialize_with = "lenient_string_list")]
        ids: Option<Vec<String>>,
    }

    #[test]
    fn test_lenient_string_accepts_numbers() {
        let sample: Sample = serde_json::from_str(r#"{"id": 3920, "ids": [1, "2a"]}"#).unwrap();
        assert_eq!(sample.id.as_deref(), Some("3920"));
        assert_eq!(sample.ids, Some(vec!["1".to_string(), "2a".to_string()]));
    }

    #[test]
    fn test_lenient_string_missing_and_null() {
        let sample: Sample = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert!(sample.id.is_none());
        assert!(sample.ids.is_none());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("Ice Age")), Some("Ice Age"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
