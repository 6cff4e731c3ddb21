//! Payload adapters that turn a fetched manifest into raw version strings
//!
//! Each release source publishes its version list in a different shape. An
//! adapter only extracts the strings; deciding which of them are valid versions
//! is left to the reducer.

pub mod manifest;
pub mod perl;
pub mod php;
pub mod ruby;
pub mod terraform;

use serde_json::Value;

use crate::version::error::LookupError;

/// Shape of a versions manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// JSON list of objects with a `version` field (Go, Node.js, Python)
    Manifest,
    /// JSON list of version strings
    Perl,
    /// JSON list of objects with `major`, `minor` and `release` fields
    Php,
    /// JSON object whose `ruby` key holds a list of version strings
    Ruby,
    /// HTML page listing releases as anchors
    Terraform,
}

impl PayloadShape {
    /// Whether the manifest is an HTML document rather than JSON
    pub fn is_html(&self) -> bool {
        matches!(self, PayloadShape::Terraform)
    }

    /// Extract the raw version strings from a manifest body
    pub fn extract(&self, payload: &str) -> Result<Vec<String>, LookupError> {
        match self {
            PayloadShape::Manifest => manifest::extract(payload),
            PayloadShape::Perl => perl::extract(payload),
            PayloadShape::Php => php::extract(payload),
            PayloadShape::Ruby => ruby::extract(payload),
            PayloadShape::Terraform => terraform::extract(payload),
        }
    }
}

/// Render a JSON string or number as text; other values have no version form
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_terraform_is_html() {
        assert!(PayloadShape::Terraform.is_html());
        assert!(!PayloadShape::Manifest.is_html());
        assert!(!PayloadShape::Ruby.is_html());
    }

    #[test]
    fn scalar_to_string_accepts_strings_and_numbers() {
        assert_eq!(scalar_to_string(&json!("1.2.3")), Some("1.2.3".to_string()));
        assert_eq!(scalar_to_string(&json!(8)), Some("8".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!({"v": 1})), None);
    }
}
