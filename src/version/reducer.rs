//! Reduction of raw version strings to one version per major.minor line

use indexmap::IndexMap;
use semver::Version;
use tracing::debug;

use crate::version::semver::{classify, compare_segments, major_minor};

/// Bounds and flags applied while reducing a raw version list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePolicy {
    /// Lowest major.minor line to keep (inclusive)
    pub min_version: Version,
    /// Highest major.minor line to keep (inclusive)
    pub max_version: Version,
    pub include_prerelease: bool,
    /// Emit `major.minor` instead of the full version string
    pub strip_patch: bool,
}

impl RangePolicy {
    fn contains(&self, line: &Version) -> bool {
        self.min_version <= *line && *line <= self.max_version
    }
}

/// Best candidate seen so far for one major.minor line
struct Candidate {
    rank: Version,
    display: String,
}

/// Reduce raw version strings to a sorted list holding the highest version of
/// every major.minor line inside the policy bounds.
///
/// Unparseable strings are dropped. Range membership is decided on the
/// major.minor line alone; the full version only decides which entry wins
/// inside a line.
pub fn reduce(raw_versions: &[String], policy: &RangePolicy) -> Vec<String> {
    let mut buckets: IndexMap<(u64, u64), Candidate> = IndexMap::new();

    for raw in raw_versions {
        let parsed = classify(raw);
        let is_prerelease = parsed.is_prerelease();
        let Some(version) = parsed.into_version() else {
            debug!("Skipping invalid version: {:?}", raw);
            continue;
        };

        if is_prerelease && !policy.include_prerelease {
            continue;
        }

        let line = major_minor(&version);
        if !policy.contains(&line) {
            continue;
        }

        let candidate = if policy.strip_patch {
            Candidate {
                display: format!("{}.{}", version.major, version.minor),
                rank: line,
            }
        } else {
            Candidate {
                display: raw.trim().to_string(),
                rank: version,
            }
        };

        let key = (candidate.rank.major, candidate.rank.minor);
        match buckets.get_mut(&key) {
            Some(best) if best.rank < candidate.rank => *best = candidate,
            Some(_) => {}
            None => {
                buckets.insert(key, candidate);
            }
        }
    }

    let mut versions: Vec<String> = buckets.into_values().map(|c| c.display).collect();
    versions.sort_by(|a, b| compare_segments(a, b));
    versions
}

/// How much of the reduced list to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    HighestOnly,
    /// The highest `n` entries
    Last(usize),
}

impl Selection {
    pub fn new(highest_only: bool, max_versions: usize) -> Self {
        if highest_only {
            Selection::HighestOnly
        } else if max_versions > 0 {
            Selection::Last(max_versions)
        } else {
            Selection::All
        }
    }
}

/// Cut a sorted version list down according to `selection`
pub fn truncate(mut versions: Vec<String>, selection: Selection) -> Vec<String> {
    match selection {
        Selection::All => versions,
        Selection::HighestOnly => versions.pop().into_iter().collect(),
        Selection::Last(count) => {
            let start = versions.len().saturating_sub(count);
            versions.split_off(start)
        }
    }
}
