use crate::utils::error::{FlowError, Result};
use serde_json::Value;
use std::path::Path;

/// Reads a JSON array of values; a single non-array document becomes a one-element input.
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(&path)?;
    parse_values(&content)
}

pub fn parse_values(content: &str) -> Result<Vec<Value>> {
    if content.trim().is_empty() {
        return Err(FlowError::EmptyResult {
            message: "input document is empty".to_string(),
        });
    }

    match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

/// Inline values are read as JSON when they parse, else kept as strings.
pub fn inline_values(raw: &[String]) -> Vec<Value> {
    raw.iter()
        .map(|item| {
            serde_json::from_str(item.trim()).unwrap_or_else(|_| Value::String(item.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_array() {
        assert_eq!(
            parse_values("[1, \"two\", null]").unwrap(),
            vec![json!(1), json!("two"), Value::Null]
        );
        assert!(parse_values("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_document() {
        assert_eq!(parse_values("{\"id\": 1}").unwrap(), vec![json!({"id": 1})]);
    }

    #[test]
    fn test_parse_rejects_garbage_and_blank() {
        assert!(matches!(
            parse_values("[1,"),
            Err(FlowError::SerializationError(_))
        ));
        assert!(matches!(
            parse_values("  "),
            Err(FlowError::EmptyResult { .. })
        ));
    }

    #[test]
    fn test_inline_values() {
        let raw = vec!["1".to_string(), "true".to_string(), "abc".to_string()];
        assert_eq!(
            inline_values(&raw),
            vec![json!(1), json!(true), json!("abc")]
        );
    }

    #[test]
    fn test_load_values_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[3, 4]").unwrap();

        assert_eq!(load_values(temp_file.path()).unwrap(), vec![json!(3), json!(4)]);
    }
}
