//! Flat list of version strings (actions-setup-perl `versions/linux.json`)

use serde_json::Value;
use tracing::debug;

use super::scalar_to_string;
use crate::version::error::LookupError;

pub fn extract(payload: &str) -> Result<Vec<String>, LookupError> {
    let entries: Vec<Value> = serde_json::from_str(payload)?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            scalar_to_string(entry).or_else(|| {
                debug!("Skipping non-scalar perl entry: {}", entry);
                None
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_passes_strings_through_unchanged() {
        let payload = r#"["5.38.0", "5.36.1", "5.8.9", "blead"]"#;

        assert_eq!(
            extract(payload).unwrap(),
            vec!["5.38.0", "5.36.1", "5.8.9", "blead"]
        );
    }

    #[test]
    fn extract_returns_empty_for_empty_list() {
        assert!(extract("[]").unwrap().is_empty());
    }

    #[test]
    fn extract_rejects_object_payload() {
        assert!(matches!(
            extract(r#"{"versions": []}"#),
            Err(LookupError::Payload(_))
        ));
    }
}
