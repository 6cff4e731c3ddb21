//! setup-ruby `ruby-builder-versions.json`

use serde_json::{Map, Value};

use super::scalar_to_string;
use crate::version::error::LookupError;

/// Key holding the MRI release list; other keys belong to alternative rubies
const LANGUAGE_KEY: &str = "ruby";

pub fn extract(payload: &str) -> Result<Vec<String>, LookupError> {
    let document: Map<String, Value> = serde_json::from_str(payload)?;

    let versions = document
        .get(LANGUAGE_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            LookupError::Payload(format!("expected a `{}` list in ruby manifest", LANGUAGE_KEY))
        })?;

    Ok(versions.iter().filter_map(scalar_to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_collects_the_ruby_list_verbatim() {
        let payload = r#"{
            "ruby": ["3.1.0", "3.2.0", "not-a-version"],
            "jruby": ["9.4.5.0"],
            "truffleruby": ["23.1.2"]
        }"#;

        assert_eq!(
            extract(payload).unwrap(),
            vec!["3.1.0", "3.2.0", "not-a-version"]
        );
    }

    #[test]
    fn extract_fails_without_ruby_key() {
        let result = extract(r#"{"jruby": ["9.4.5.0"]}"#);

        assert!(matches!(result, Err(LookupError::Payload(_))));
    }

    #[test]
    fn extract_fails_when_ruby_is_not_a_list() {
        let result = extract(r#"{"ruby": "3.2.0"}"#);

        assert!(matches!(result, Err(LookupError::Payload(_))));
    }
}
