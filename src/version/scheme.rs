//! Versioning schemes and type-erased versions/ranges
//!
//! A [`VersioningScheme`] pairs a version parser with an optional range parser
//! so callers can parse untyped input by scheme identifier. The values it
//! produces are [`AnyVersion`] / [`AnyVersionRange`]; comparing or matching
//! values of different schemes fails with [`SchemeMismatchError`].

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::version::error::{SchemeMismatchError, VersionParseError, VersionRangeParseError};
use crate::version::range::IntervalVersionRange;
use crate::version::schemes::{IntegerVersion, SemanticVersion};
use crate::version::traits::{Version, VersionRange};

trait DynVersion: fmt::Debug + fmt::Display + Send + Sync {
    fn scheme(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynVersion) -> bool;
    fn dyn_cmp(&self, other: &dyn DynVersion) -> Result<Ordering, SchemeMismatchError>;
}

impl<V: Version> DynVersion for V {
    fn scheme(&self) -> &'static str {
        V::SCHEME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynVersion) -> bool {
        other.as_any().downcast_ref::<V>() == Some(self)
    }

    fn dyn_cmp(&self, other: &dyn DynVersion) -> Result<Ordering, SchemeMismatchError> {
        let other = other.as_any().downcast_ref::<V>().ok_or(SchemeMismatchError {
            expected: V::SCHEME,
            found: other.scheme(),
        })?;
        Ok(self.cmp(other))
    }
}

/// A version of any registered scheme
#[derive(Clone)]
pub struct AnyVersion(Arc<dyn DynVersion>);

impl AnyVersion {
    pub fn new<V: Version>(version: V) -> Self {
        Self(Arc::new(version))
    }

    /// Identifier of the scheme this version belongs to
    pub fn scheme(&self) -> &'static str {
        self.0.scheme()
    }

    /// Recover the concrete version, if it is a `V`
    pub fn downcast_ref<V: Version>(&self) -> Option<&V> {
        self.0.as_any().downcast_ref::<V>()
    }

    /// Order two versions of the same scheme.
    ///
    /// Versions of different schemes have no order; that is reported as an
    /// error rather than coerced.
    pub fn try_cmp(&self, other: &AnyVersion) -> Result<Ordering, SchemeMismatchError> {
        self.0.dyn_cmp(other.0.as_ref())
    }
}

/// Versions of different schemes are never equal
impl PartialEq for AnyVersion {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(other.0.as_ref())
    }
}

impl fmt::Debug for AnyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AnyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

trait DynRange: fmt::Display + Send + Sync {
    fn scheme(&self) -> &'static str;
    fn dyn_matches(&self, version: &AnyVersion) -> Result<bool, SchemeMismatchError>;
}

impl<R> DynRange for R
where
    R: VersionRange + 'static,
{
    fn scheme(&self) -> &'static str {
        R::Item::SCHEME
    }

    fn dyn_matches(&self, version: &AnyVersion) -> Result<bool, SchemeMismatchError> {
        let version = version
            .downcast_ref::<R::Item>()
            .ok_or(SchemeMismatchError {
                expected: R::Item::SCHEME,
                found: version.scheme(),
            })?;
        Ok(self.matches(version))
    }
}

/// A version range of any registered scheme
#[derive(Clone)]
pub struct AnyVersionRange(Arc<dyn DynRange>);

impl AnyVersionRange {
    pub fn new<R: VersionRange + 'static>(range: R) -> Self {
        Self(Arc::new(range))
    }

    pub fn scheme(&self) -> &'static str {
        self.0.scheme()
    }

    /// Check whether `version` lies inside this range.
    ///
    /// Fails when `version` belongs to another scheme.
    pub fn matches(&self, version: &AnyVersion) -> Result<bool, SchemeMismatchError> {
        self.0.dyn_matches(version)
    }
}

impl fmt::Debug for AnyVersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyVersionRange")
            .field(&self.scheme())
            .field(&self.0.to_string())
            .finish()
    }
}

impl fmt::Display for AnyVersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub type VersionParseFn = fn(&str) -> Result<AnyVersion, VersionParseError>;
pub type RangeParseFn = fn(&str) -> Result<AnyVersionRange, VersionRangeParseError>;

/// Parse functions for one versioning scheme
#[derive(Clone, Copy)]
pub struct VersioningScheme {
    name: &'static str,
    parse_version: VersionParseFn,
    parse_range: Option<RangeParseFn>,
}

fn parse_any_version<V: Version>(text: &str) -> Result<AnyVersion, VersionParseError> {
    V::parse(text).map(AnyVersion::new)
}

fn parse_any_interval_range<V: Version>(
    text: &str,
) -> Result<AnyVersionRange, VersionRangeParseError> {
    IntervalVersionRange::<V>::parse(text).map(AnyVersionRange::new)
}

impl VersioningScheme {
    /// Scheme with explicit parse functions
    pub fn new(
        name: &'static str,
        parse_version: VersionParseFn,
        parse_range: Option<RangeParseFn>,
    ) -> Self {
        Self {
            name,
            parse_version,
            parse_range,
        }
    }

    /// Scheme for `V` without range support
    pub fn versions_only<V: Version>() -> Self {
        Self::new(V::SCHEME, parse_any_version::<V>, None)
    }

    /// Scheme for `V` with interval-notation ranges
    pub fn with_interval_ranges<V: Version>() -> Self {
        Self::new(
            V::SCHEME,
            parse_any_version::<V>,
            Some(parse_any_interval_range::<V>),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supports_ranges(&self) -> bool {
        self.parse_range.is_some()
    }

    pub fn parse_version(&self, text: &str) -> Result<AnyVersion, VersionParseError> {
        (self.parse_version)(text)
    }

    /// Parse a range, or `None` when this scheme has no range support
    pub fn parse_range(
        &self,
        text: &str,
    ) -> Option<Result<AnyVersionRange, VersionRangeParseError>> {
        self.parse_range.map(|parse| parse(text))
    }
}

impl fmt::Debug for VersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersioningScheme")
            .field("name", &self.name)
            .field("supports_ranges", &self.supports_ranges())
            .finish()
    }
}

/// Schemes shipped with this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardScheme {
    /// Bare integers (`1`, `42`)
    Integer,
    /// Semantic versions (`1.2.3`, partial `1.2`)
    Semantic,
}

impl StandardScheme {
    pub fn all() -> [StandardScheme; 2] {
        [StandardScheme::Integer, StandardScheme::Semantic]
    }

    /// Returns the identifier the scheme is registered under
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardScheme::Integer => IntegerVersion::SCHEME,
            StandardScheme::Semantic => SemanticVersion::SCHEME,
        }
    }

    pub fn versioning_scheme(&self) -> VersioningScheme {
        match self {
            StandardScheme::Integer => VersioningScheme::with_interval_ranges::<IntegerVersion>(),
            StandardScheme::Semantic => VersioningScheme::with_interval_ranges::<SemanticVersion>(),
        }
    }
}

impl std::str::FromStr for StandardScheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardScheme::all()
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn int(text: &str) -> AnyVersion {
        StandardScheme::Integer
            .versioning_scheme()
            .parse_version(text)
            .unwrap()
    }

    fn semver(text: &str) -> AnyVersion {
        StandardScheme::Semantic
            .versioning_scheme()
            .parse_version(text)
            .unwrap()
    }

    #[rstest]
    #[case("1", "2", Ordering::Less)]
    #[case("01", "1", Ordering::Equal)]
    #[case("3", "2", Ordering::Greater)]
    fn try_cmp_orders_same_scheme(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(int(a).try_cmp(&int(b)), Ok(expected));
    }

    #[test]
    fn try_cmp_rejects_other_scheme() {
        assert_eq!(
            int("1").try_cmp(&semver("1.0.0")),
            Err(SchemeMismatchError {
                expected: "integer",
                found: "semver"
            })
        );
        assert_eq!(
            semver("1.0.0").try_cmp(&int("1")),
            Err(SchemeMismatchError {
                expected: "semver",
                found: "integer"
            })
        );
    }

    #[test]
    fn equality_is_semantic_within_scheme_and_false_across() {
        assert_eq!(int("01"), int("1"));
        assert_ne!(int("1"), int("2"));
        assert_ne!(int("1"), semver("1"));
    }

    #[test]
    fn downcast_ref_recovers_concrete_version() {
        let version = int(" 7 ");

        assert_eq!(
            version.downcast_ref::<IntegerVersion>(),
            Some(&IntegerVersion::new(7))
        );
        assert_eq!(version.downcast_ref::<SemanticVersion>(), None);
        assert_eq!(version.to_string(), " 7 ");
        assert_eq!(version.scheme(), "integer");
    }

    #[test]
    fn range_matches_same_scheme_and_rejects_other() {
        let range = StandardScheme::Integer
            .versioning_scheme()
            .parse_range("[4,7]")
            .unwrap()
            .unwrap();

        assert_eq!(range.matches(&int("5")), Ok(true));
        assert_eq!(range.matches(&int("8")), Ok(false));
        assert_eq!(
            range.matches(&semver("5")),
            Err(SchemeMismatchError {
                expected: "integer",
                found: "semver"
            })
        );
        assert_eq!(range.to_string(), "[4,7]");
        assert_eq!(range.scheme(), "integer");
    }

    #[test]
    fn versions_only_scheme_has_no_range_parser() {
        let scheme = VersioningScheme::versions_only::<IntegerVersion>();

        assert!(!scheme.supports_ranges());
        assert!(scheme.parse_range("[1,2]").is_none());
        assert_eq!(scheme.name(), "integer");
    }

    #[rstest]
    #[case("integer", Ok(StandardScheme::Integer))]
    #[case("semver", Ok(StandardScheme::Semantic))]
    #[case("maven", Err(()))]
    fn standard_scheme_from_str_returns_expected(
        #[case] id: &str,
        #[case] expected: Result<StandardScheme, ()>,
    ) {
        assert_eq!(id.parse::<StandardScheme>(), expected);
    }
}
