//! Semantic versioning: `1.2.3`, `1.2.3-rc.1`
//!
//! Ordering follows the `semver` crate, so pre-releases sort before their
//! release. Partial versions such as `1` or `1.2` are padded with zeros.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::version::error::{VersionParseError, VersionRangeParseError};
use crate::version::range::IntervalVersionRange;
use crate::version::traits::{Version, VersionParser};

pub const SCHEME: &str = "semver";

/// Range of semantic versions in interval notation, e.g. `[1.2,2)`
pub type SemanticVersionRange = IntervalVersionRange<SemanticVersion>;

/// A semantic version (`MAJOR.MINOR.PATCH[-PRE][+BUILD]`)
///
/// Partial versions are accepted and padded with zeros:
/// - "1" -> 1.0.0
/// - "1.2" -> 1.2.0
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    version: semver::Version,
    source: Option<String>,
}

impl SemanticVersion {
    pub fn new(version: semver::Version) -> Self {
        Self {
            version,
            source: None,
        }
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.version
    }
}

/// Pad "1" / "1.2" to a full `MAJOR.MINOR.PATCH` core before parsing
fn parse_padded(text: &str) -> Result<semver::Version, semver::Error> {
    let (core, suffix) = match text.find(['-', '+']) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };
    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => text.to_string(),
    };
    semver::Version::parse(&normalized)
}

impl Version for SemanticVersion {
    const SCHEME: &'static str = SCHEME;

    fn parse(text: &str) -> Result<Self, VersionParseError> {
        let version = parse_padded(text.trim())
            .map_err(|e| VersionParseError::new(text, SCHEME, e.to_string()))?;

        Ok(Self {
            version,
            source: Some(text.to_string()),
        })
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.write_str(source),
            None => write!(f, "{}", self.version),
        }
    }
}

impl From<semver::Version> for SemanticVersion {
    fn from(version: semver::Version) -> Self {
        Self::new(version)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for SemanticVersionRange {
    type Err = VersionRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticVersionParser;

impl VersionParser for SemanticVersionParser {
    type Output = SemanticVersion;

    fn parse_version(&self, text: &str) -> Result<SemanticVersion, VersionParseError> {
        SemanticVersion::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", "1.0.0")]
    #[case("1.2", "1.2.0")]
    #[case("1.2.3", "1.2.3")]
    #[case(" 1.2.3 ", "1.2.3")]
    #[case("1-alpha.1", "1.0.0-alpha.1")]
    #[case("1.2+build.5", "1.2.0+build.5")]
    #[case("1.2.3-rc.1", "1.2.3-rc.1")]
    fn parse_pads_partial_versions(#[case] text: &str, #[case] expected: &str) {
        let version = SemanticVersion::parse(text).unwrap();

        assert_eq!(version.as_semver().to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("v1.2.3")]
    #[case("1.2.3.4")]
    #[case("one")]
    fn parse_rejects_invalid_versions(#[case] text: &str) {
        let error = SemanticVersion::parse(text).unwrap_err();

        assert_eq!(error.text, text);
        assert_eq!(error.scheme, SCHEME);
    }

    #[test]
    fn display_round_trips_parsed_text() {
        let version = SemanticVersion::parse(" 1.2 ").unwrap();

        assert_eq!(version.to_string(), " 1.2 ");
        assert_eq!(SemanticVersion::parse(&version.to_string()).unwrap(), version);
    }

    #[test]
    fn partial_and_full_versions_are_equal() {
        assert_eq!(
            SemanticVersion::parse("1.2").unwrap(),
            SemanticVersion::parse("1.2.0").unwrap()
        );
        assert_eq!(
            SemanticVersion::new(semver::Version::new(1, 2, 0)).to_string(),
            "1.2.0"
        );
    }

    #[rstest]
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)]
    #[case("1.2", "1.10", Ordering::Less)]
    #[case("2", "1.99.99", Ordering::Greater)]
    fn cmp_uses_semver_precedence(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        let a = SemanticVersion::parse(a).unwrap();
        let b = SemanticVersion::parse(b).unwrap();

        assert_eq!(a.cmp(&b), expected);
    }
}
