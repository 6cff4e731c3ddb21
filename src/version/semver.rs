use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};

/// Loose version grammar: optional `v`, dot separated numeric release segments,
/// an optional qualifier that starts with a letter (`rc1`, `-beta.2`, `preview1`),
/// an optional numeric post-release (`-1`) and an optional local label (`+build.5`).
static LOOSE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[vV]?(?P<release>\d+(?:\.\d+)*)(?:[-_.]?(?P<pre>[A-Za-z][0-9A-Za-z]*(?:[.\-][0-9A-Za-z]+)*))?(?:-(?P<post>\d+))?(?:\+(?P<local>[0-9A-Za-z]+(?:[-_.][0-9A-Za-z]+)*))?$",
    )
    .expect("loose version pattern is valid")
});

/// Outcome of parsing a single version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVersion {
    /// Numeric release without a qualifier
    Stable(Version),
    /// Numeric release carrying a pre-release qualifier
    PreRelease(Version),
    /// Anything whose leading numeric segments can't be read
    Invalid,
}

impl ParsedVersion {
    pub fn version(&self) -> Option<&Version> {
        match self {
            ParsedVersion::Stable(v) | ParsedVersion::PreRelease(v) => Some(v),
            ParsedVersion::Invalid => None,
        }
    }

    pub fn into_version(self) -> Option<Version> {
        match self {
            ParsedVersion::Stable(v) | ParsedVersion::PreRelease(v) => Some(v),
            ParsedVersion::Invalid => None,
        }
    }

    pub fn is_prerelease(&self) -> bool {
        matches!(self, ParsedVersion::PreRelease(_))
    }
}

/// Parse a loosely formatted version string and classify it.
///
/// Partial versions are padded with zeros and release segments beyond the
/// third are kept as build metadata so they still break ties.
///
/// Examples:
/// - "1" -> Stable(1.0.0)
/// - "1.2" -> Stable(1.2.0)
/// - "2.0.0-rc1" -> PreRelease(2.0.0-rc1)
/// - "1.23rc1" -> PreRelease(1.23.0-rc1)
/// - "1.2.3-1" -> Stable(1.2.3+post.1)
/// - "bogus" -> Invalid
pub fn classify(version: &str) -> ParsedVersion {
    let Some(caps) = LOOSE_VERSION_RE.captures(version.trim()) else {
        return ParsedVersion::Invalid;
    };

    let mut segments = Vec::new();
    for segment in caps["release"].split('.') {
        match segment.parse::<u64>() {
            Ok(n) => segments.push(n),
            Err(_) => return ParsedVersion::Invalid,
        }
    }

    let mut parsed = Version::new(
        segments[0],
        segments.get(1).copied().unwrap_or(0),
        segments.get(2).copied().unwrap_or(0),
    );

    // Extra release segments, then the post-release, then the local label.
    // Empty metadata orders lowest, so each of these sorts above the bare release.
    let mut build: Vec<String> = segments.iter().skip(3).map(u64::to_string).collect();
    if let Some(post) = caps.name("post") {
        build.push("post".to_string());
        build.push(post.as_str().to_string());
    }
    if let Some(local) = caps.name("local") {
        build.extend(local.as_str().split(['-', '_', '.']).map(str::to_string));
    }
    if !build.is_empty() {
        match BuildMetadata::new(&build.join(".")) {
            Ok(metadata) => parsed.build = metadata,
            Err(_) => return ParsedVersion::Invalid,
        }
    }

    match caps.name("pre") {
        None => ParsedVersion::Stable(parsed),
        Some(pre) => match Prerelease::new(pre.as_str()) {
            Ok(pre) => {
                parsed.pre = pre;
                ParsedVersion::PreRelease(parsed)
            }
            Err(_) => ParsedVersion::Invalid,
        },
    }
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Returns None for strings that `classify` deems invalid.
pub fn parse_version(version: &str) -> Option<Version> {
    classify(version).into_version()
}

/// The major.minor line of a version as a comparable version (`1.2.9` -> `1.2.0`)
pub fn major_minor(version: &Version) -> Version {
    Version::new(version.major, version.minor, 0)
}

/// One dot separated piece of a version string, used for output ordering
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    Number(u64),
    Text(String),
}

/// Split a version string on `.` into numeric and textual segments.
///
/// A part with a numeric head and a text tail (`9rc1`, `0-beta`) yields both,
/// so `1.9rc1` still orders below `1.10.0`. Numbers order before text, and a
/// shorter list orders before a longer list that it prefixes.
pub fn segment_key(version: &str) -> Vec<Segment> {
    let mut key = Vec::new();

    for part in version.split('.') {
        let digits = part.bytes().take_while(u8::is_ascii_digit).count();
        let (head, tail) = part.split_at(digits);

        if !head.is_empty() {
            match head.parse() {
                Ok(n) => key.push(Segment::Number(n)),
                Err(_) => {
                    key.push(Segment::Text(part.to_string()));
                    continue;
                }
            }
        }
        if !tail.is_empty() || head.is_empty() {
            key.push(Segment::Text(tail.to_string()));
        }
    }

    key
}

/// Compare two version strings segment-wise
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    segment_key(a).cmp(&segment_key(b))
}
