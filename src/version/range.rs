//! Interval-backed version ranges

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::trace;

use crate::version::boundary::BoundaryKind;
use crate::version::error::{
    IntervalError, RangeParseFailure, VersionParseError, VersionRangeParseError,
};
use crate::version::interval::Interval;
use crate::version::notation::IntervalNotationParser;
use crate::version::traits::{Version, VersionParser, VersionRange};

/// A [`VersionRange`] described by interval notation.
///
/// | notation | matches          |
/// |----------|------------------|
/// | `4`      | `v >= 4`         |
/// | `[4]`    | `v == 4`         |
/// | `(4)`    | nothing          |
/// | `[4,7]`  | `4 <= v <= 7`    |
/// | `(4,7)`  | `4 < v < 7`      |
/// | `[4,]`   | `v >= 4`         |
/// | `[,7)`   | `v < 7`          |
///
/// Equality and hashing only look at the interval; the source text of parsed
/// ranges is kept for `Display` alone.
#[derive(Debug, Clone)]
pub struct IntervalVersionRange<V> {
    interval: Interval<V>,
    source: Option<String>,
}

impl<V: Version> IntervalVersionRange<V> {
    /// Build a range from boundary kinds and bound values.
    ///
    /// Fails for unbalanced kinds, missing values, or `lower > upper`.
    pub fn new(
        lower_kind: BoundaryKind,
        lower: Option<V>,
        upper: Option<V>,
        upper_kind: BoundaryKind,
    ) -> Result<Self, IntervalError> {
        Ok(Self {
            interval: Interval::ordered(lower_kind, lower, upper, upper_kind)?,
            source: None,
        })
    }

    /// Wrap an interval, failing when its lower bound is above its upper bound
    pub fn from_interval(interval: Interval<V>) -> Result<Self, IntervalError> {
        Ok(Self {
            interval: interval.check_order()?,
            source: None,
        })
    }

    /// Parse interval notation, resolving tokens with [`Version::parse`]
    pub fn parse(range: &str) -> Result<Self, VersionRangeParseError> {
        Self::resolve(range, V::parse)
    }

    /// Parse interval notation, resolving tokens with the given parser
    pub fn parse_with<P>(parser: &P, range: &str) -> Result<Self, VersionRangeParseError>
    where
        P: VersionParser<Output = V> + ?Sized,
    {
        Self::resolve(range, |token| parser.parse_version(token))
    }

    fn resolve<F>(range: &str, parse_version: F) -> Result<Self, VersionRangeParseError>
    where
        F: Fn(&str) -> Result<V, VersionParseError>,
    {
        let tokens = IntervalNotationParser::new().parse(range)?;

        let interval = tokens
            .try_map(|token| {
                trace!("Resolving {} version token '{}'", V::SCHEME, token);
                parse_version(&token)
            })
            .map_err(|e| VersionRangeParseError::new(range, RangeParseFailure::InvalidVersion(e)))?
            .check_order()
            .map_err(|e| VersionRangeParseError::new(range, e))?;

        Ok(Self {
            interval,
            source: Some(range.to_string()),
        })
    }

    pub fn interval(&self) -> &Interval<V> {
        &self.interval
    }

    /// Text the range was parsed from, if it was parsed
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl<V: Version> VersionRange for IntervalVersionRange<V> {
    type Item = V;

    fn matches(&self, version: &V) -> bool {
        self.interval.contains(version)
    }
}

impl<V: PartialEq> PartialEq for IntervalVersionRange<V> {
    fn eq(&self, other: &Self) -> bool {
        self.interval == other.interval
    }
}

impl<V: Eq> Eq for IntervalVersionRange<V> {}

impl<V: Hash> Hash for IntervalVersionRange<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interval.hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for IntervalVersionRange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.write_str(source),
            None => write!(f, "{}", self.interval),
        }
    }
}

impl<V: fmt::Display> Serialize for IntervalVersionRange<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, V: Version> Deserialize<'de> for IntervalVersionRange<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
