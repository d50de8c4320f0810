// Copyright 2025 Alexandre D. Díaz
use serde_json::Value;

use crate::error::{Error, Result};

/// Converts an OpenAPI document written in YAML or JSON into compact JSON text.
/// The document root must be a mapping.
pub fn yaml_or_json_to_json(data: &[u8]) -> Result<String> {
    let value = match serde_yaml::from_slice::<Value>(data) {
        Ok(value) => value,
        Err(yaml_err) => match serde_json::from_slice::<Value>(data) {
            Ok(value) => value,
            Err(json_err) => {
                return Err(Error::InvalidSpec(format!(
                    "yaml: {}; json: {}",
                    yaml_err, json_err
                )))
            }
        },
    };
    if !value.is_object() {
        return Err(Error::InvalidSpec(
            "the document root is not a mapping".to_string(),
        ));
    }
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yaml_document() {
        let yaml = b"openapi: 3.0.0\ninfo:\n  title: Petstore\n  version: '1.0'\npaths: {}\n";
        let json = yaml_or_json_to_json(yaml).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["openapi"], "3.0.0");
        assert_eq!(value["info"]["title"], "Petstore");
        assert_eq!(value["info"]["version"], "1.0");
    }

    #[test]
    fn json_document() {
        let json = yaml_or_json_to_json(b"{\"openapi\": \"3.1.0\", \"paths\": {}}").unwrap();
        assert_eq!(json, r#"{"openapi":"3.1.0","paths":{}}"#);
    }

    #[test]
    fn tab_indented_json_document() {
        let json = yaml_or_json_to_json(b"{\n\t\"swagger\": \"2.0\"\n}").unwrap();
        assert_eq!(json, r#"{"swagger":"2.0"}"#);
    }

    #[test]
    fn rejects_non_documents() {
        assert!(matches!(
            yaml_or_json_to_json(b"just some words"),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            yaml_or_json_to_json(b"- a\n- b\n"),
            Err(Error::InvalidSpec(_))
        ));
        assert!(matches!(
            yaml_or_json_to_json(b"{\"a\": [1, 2"),
            Err(Error::InvalidSpec(_))
        ));
    }
}
