//! phpreleases.com release list

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::scalar_to_string;
use crate::version::error::LookupError;

#[derive(Debug, Deserialize)]
struct PhpRelease {
    major: Option<Value>,
    minor: Option<Value>,
    release: Option<Value>,
}

impl PhpRelease {
    fn version(&self) -> Option<String> {
        let major = scalar_to_string(self.major.as_ref()?)?;
        let minor = scalar_to_string(self.minor.as_ref()?)?;
        let release = scalar_to_string(self.release.as_ref()?)?;
        Some(format!("{}.{}.{}", major, minor, release))
    }
}

pub fn extract(payload: &str) -> Result<Vec<String>, LookupError> {
    let releases: Vec<PhpRelease> = serde_json::from_str(payload)?;

    Ok(releases
        .iter()
        .filter_map(|release| {
            let version = release.version();
            if version.is_none() {
                debug!("Skipping incomplete php release: {:?}", release);
            }
            version
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_joins_major_minor_release() {
        let payload = r#"[
            {"id": 1, "major": 8, "minor": 3, "release": 4, "tags": []},
            {"id": 2, "major": 8, "minor": 2, "release": 17, "tags": []},
            {"id": 3, "major": "7", "minor": "4", "release": "33"}
        ]"#;

        assert_eq!(extract(payload).unwrap(), vec!["8.3.4", "8.2.17", "7.4.33"]);
    }

    #[test]
    fn extract_skips_releases_missing_a_component() {
        let payload = r#"[{"major": 8, "minor": 3}, {"major": 8, "minor": 1, "release": 0}]"#;

        assert_eq!(extract(payload).unwrap(), vec!["8.1.0"]);
    }
}
