use std::str::FromStr;
use std::time::Duration;

use semver::Version;
use tracing::warn;

use crate::language::Language;
use crate::version::error::ConfigError;
use crate::version::reducer::{RangePolicy, Selection};
use crate::version::semver::parse_version;

// =============================================================================
// Constants
// =============================================================================

/// Default timeout for each HTTP request in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Upper bound used when no maximum version is given
pub const MAX_VERSION: Version = Version::new(99999, 0, 0);

/// Lower bound used for `--min-version ALL`
pub const MIN_VERSION: Version = Version::new(0, 0, 0);

/// Token in a versions URL replaced by the latest release tag
pub const LATEST_TAG_PLACEHOLDER: &str = "LATEST_TAG";

pub const USER_AGENT: &str = "get-language-versions";

/// How the lower version bound is determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimumVersion {
    /// Oldest release cycle that hasn't reached end of life
    Eol,
    /// No lower bound
    All,
    Exact(Version),
}

impl FromStr for MinimumVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("EOL") {
            Ok(MinimumVersion::Eol)
        } else if s.eq_ignore_ascii_case("ALL") {
            Ok(MinimumVersion::All)
        } else {
            parse_version(s)
                .map(MinimumVersion::Exact)
                .ok_or_else(|| ConfigError::InvalidVersion(s.to_string()))
        }
    }
}

/// Parse a `--max-version` directive; `LATEST` means no upper bound
pub fn parse_max_version(s: &str) -> Result<Version, ConfigError> {
    if s.eq_ignore_ascii_case("LATEST") {
        Ok(MAX_VERSION)
    } else {
        parse_version(s).ok_or_else(|| ConfigError::InvalidVersion(s.to_string()))
    }
}

/// Unvalidated settings as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationInput {
    pub language: String,
    pub min_version: String,
    pub max_version: String,
    pub include_pre_releases: bool,
    pub remove_patch_version: bool,
    pub highest_only: bool,
    pub max_versions: i64,
    pub timeout_secs: u64,
}

impl Default for ConfigurationInput {
    fn default() -> Self {
        Self {
            language: String::new(),
            min_version: "EOL".to_string(),
            max_version: "LATEST".to_string(),
            include_pre_releases: false,
            remove_patch_version: false,
            highest_only: false,
            max_versions: 0,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Validated settings for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub language: Language,
    /// Identifier as given on the command line, used in output
    pub language_name: String,
    pub min_version: MinimumVersion,
    pub max_version: Version,
    pub include_pre_releases: bool,
    pub remove_patch_version: bool,
    pub highest_only: bool,
    pub max_versions: usize,
    pub timeout: Duration,
}

impl Configuration {
    /// Validates caller input. No network access happens here.
    pub fn new(input: ConfigurationInput) -> Result<Self, ConfigError> {
        let language: Language = input.language.parse()?;

        if input.include_pre_releases && input.remove_patch_version {
            return Err(ConfigError::ConflictingFlags);
        }

        let min_version = input.min_version.parse()?;
        let max_version = parse_max_version(&input.max_version)?;

        let max_versions = usize::try_from(input.max_versions).unwrap_or_else(|_| {
            warn!(
                "max versions must not be negative (got {}), using 0",
                input.max_versions
            );
            0
        });

        Ok(Self {
            language,
            language_name: input.language.trim().to_string(),
            min_version,
            max_version,
            include_pre_releases: input.include_pre_releases,
            remove_patch_version: input.remove_patch_version,
            highest_only: input.highest_only,
            max_versions,
            timeout: Duration::from_secs(input.timeout_secs),
        })
    }

    /// Reducer policy for a resolved lower bound
    pub fn range_policy(&self, min_version: Version) -> RangePolicy {
        RangePolicy {
            min_version,
            max_version: self.max_version.clone(),
            include_prerelease: self.include_pre_releases,
            strip_patch: self.remove_patch_version,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.highest_only, self.max_versions)
    }
}
