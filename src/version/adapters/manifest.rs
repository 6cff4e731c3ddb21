//! `versions-manifest.json` as published by the actions/*-versions repositories

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::scalar_to_string;
use crate::version::error::LookupError;

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    version: Option<Value>,
}

pub fn extract(payload: &str) -> Result<Vec<String>, LookupError> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(payload)?;

    let versions = entries
        .into_iter()
        .filter_map(|entry| {
            let version = entry.version.as_ref().and_then(scalar_to_string);
            if version.is_none() {
                debug!("Skipping manifest entry without a version: {:?}", entry);
            }
            version
        })
        .collect();

    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_collects_version_fields_in_source_order() {
        let payload = r#"[
            {"version": "1.2.3", "stable": true, "files": []},
            {"version": "1.2.9", "stable": true, "files": []},
            {"version": "1.3.0", "stable": true, "files": []},
            {"version": "2.0.0-rc1", "stable": false, "files": []}
        ]"#;

        assert_eq!(
            extract(payload).unwrap(),
            vec!["1.2.3", "1.2.9", "1.3.0", "2.0.0-rc1"]
        );
    }

    #[test]
    fn extract_skips_entries_without_version() {
        let payload = r#"[{"version": "3.12.1"}, {"stable": true}, {"version": null}]"#;

        assert_eq!(extract(payload).unwrap(), vec!["3.12.1"]);
    }

    #[test]
    fn extract_rejects_non_list_payload() {
        let result = extract(r#"{"version": "1.0.0"}"#);

        assert!(matches!(result, Err(LookupError::Payload(_))));
    }
}
