//! Version, parser and range abstractions

use std::fmt;
use std::hash::Hash;

#[cfg(test)]
use mockall::automock;

use crate::version::error::VersionParseError;

/// An immutable, totally ordered version identifier of one scheme.
///
/// `Display` yields either the exact text the value was parsed from or a
/// canonical form for constructed values; parsing that text again must give an
/// equal value. Equality is semantic and may be looser than textual equality.
/// Comparisons only exist between values of the same type, so mixing schemes
/// is rejected at compile time.
pub trait Version: Clone + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Identifier of the scheme this version belongs to
    const SCHEME: &'static str;

    /// Parse a version from its textual form
    fn parse(text: &str) -> Result<Self, VersionParseError>;
}

/// Parses version tokens into a concrete [`Version`]
#[cfg_attr(test, automock(type Output = crate::version::schemes::IntegerVersion;))]
pub trait VersionParser {
    type Output: Version;

    fn parse_version(&self, text: &str) -> Result<Self::Output, VersionParseError>;
}

/// A predicate selecting the versions of one scheme that satisfy a constraint
pub trait VersionRange: fmt::Display + Send + Sync {
    type Item: Version;

    /// Check whether `version` lies inside this range
    fn matches(&self, version: &Self::Item) -> bool;
}
