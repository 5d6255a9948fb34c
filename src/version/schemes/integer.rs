//! Bare integer versioning: `1`, `2`, `42`
//!
//! Versions are plain (optionally signed) decimal integers with optional
//! surrounding whitespace. `"01"` and `"1"` are equal versions but keep their
//! own text.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::version::error::{VersionParseError, VersionRangeParseError};
use crate::version::range::IntervalVersionRange;
use crate::version::traits::{Version, VersionParser};

pub const SCHEME: &str = "integer";

/// Range of integer versions in interval notation
pub type IntegerVersionRange = IntervalVersionRange<IntegerVersion>;

/// A version that is a single integer
#[derive(Debug, Clone)]
pub struct IntegerVersion {
    value: i64,
    /// Text this version was parsed from, if any
    source: Option<String>,
}

impl IntegerVersion {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            source: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Version for IntegerVersion {
    const SCHEME: &'static str = SCHEME;

    fn parse(text: &str) -> Result<Self, VersionParseError> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|e| VersionParseError::new(text, SCHEME, e.to_string()))?;

        Ok(Self {
            value,
            source: Some(text.to_string()),
        })
    }
}

impl PartialEq for IntegerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for IntegerVersion {}

impl Hash for IntegerVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for IntegerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntegerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for IntegerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.write_str(source),
            None => write!(f, "{}", self.value),
        }
    }
}

impl From<i64> for IntegerVersion {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl FromStr for IntegerVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for IntegerVersionRange {
    type Err = VersionRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IntegerVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IntegerVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// [`VersionParser`] for integer versions
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerVersionParser;

impl VersionParser for IntegerVersionParser {
    type Output = IntegerVersion;

    fn parse_version(&self, text: &str) -> Result<IntegerVersion, VersionParseError> {
        IntegerVersion::parse(text)
    }
}
