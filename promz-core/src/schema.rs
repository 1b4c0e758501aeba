//! # Schema
//!
//! The JSON-Schema (draft-07) contract every `.promz` document must satisfy.
//!
//! The schema is built once on first use and never changes afterwards.

use serde_json::{Value, json};
use std::sync::LazyLock;

pub const SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

pub static PROMZ_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": SCHEMA_DRAFT,
        "type": "object",
        "properties": {
            "version": {"type": "string"},
            "metadata": {
                "type": "object",
                "properties": {
                    "title": {"type": "string"},
                    "description": {"type": "string"},
                    "author": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "created_at": {"type": "string", "format": "date-time"},
                    "updated_at": {"type": "string", "format": "date-time"}
                },
                "required": ["title", "description", "author", "tags", "created_at", "updated_at"]
            },
            "content": {
                "type": "object",
                "properties": {
                    "prompt": {"type": "string"},
                    "examples": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "input": {"type": "string"},
                                "output": {"type": "string"}
                            },
                            "required": ["input", "output"]
                        }
                    },
                    "variables": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "description": {"type": "string"}
                            },
                            "required": ["name", "description"]
                        }
                    },
                    "apps": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["prompt", "examples", "variables", "apps"]
            },
            "history": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "version": {"type": "string"},
                        "updated_at": {"type": "string", "format": "date-time"},
                        "changes": {"type": "string"}
                    },
                    "required": ["version", "updated_at", "changes"]
                }
            }
        },
        "required": ["version", "metadata", "content", "history"]
    })
});

/// Returns the schema.
pub fn schema() -> &'static Value {
    &PROMZ_SCHEMA
}

/// Returns the schema as pretty-printed JSON text.
pub fn schema_text() -> String {
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(schema()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(value: &Value) -> Vec<&str> {
        value["required"]
            .as_array()
            .expect("Expected required array")
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }

    #[test]
    fn test_top_level_required_fields() {
        assert_eq!(
            vec!["version", "metadata", "content", "history"],
            required(schema())
        );
    }

    #[test]
    fn test_content_required_fields() {
        assert_eq!(
            vec!["prompt", "examples", "variables", "apps"],
            required(&schema()["properties"]["content"])
        );
    }

    #[test]
    fn test_timestamps_are_date_time() {
        let properties = &schema()["properties"];
        assert_eq!("date-time", properties["metadata"]["properties"]["created_at"]["format"]);
        assert_eq!("date-time", properties["metadata"]["properties"]["updated_at"]["format"]);
        assert_eq!("date-time", properties["history"]["items"]["properties"]["updated_at"]["format"]);
    }

    #[test]
    fn test_schema_text_round_trips() {
        let parsed: Value = serde_json::from_str(&schema_text()).expect("Schema text should be JSON");
        assert_eq!(schema(), &parsed);
        assert!(schema_text().contains(SCHEMA_DRAFT));
    }
}
