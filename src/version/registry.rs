//! Registry of versioning schemes keyed by identifier

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::version::error::SchemeError;
use crate::version::scheme::{AnyVersion, AnyVersionRange, StandardScheme, VersioningScheme};

static STANDARD: LazyLock<SchemeRegistry> = LazyLock::new(SchemeRegistry::with_standard_schemes);

/// Lookup table from scheme identifier to [`VersioningScheme`].
///
/// Populate it with [`SchemeRegistry::register`] during startup, then share it
/// read-only; lookups and parsing take `&self` only.
#[derive(Debug, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, VersioningScheme>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every [`StandardScheme`]
    pub fn with_standard_schemes() -> Self {
        let mut registry = Self::new();
        for scheme in StandardScheme::all() {
            let registered = registry.register(scheme.as_str(), scheme.versioning_scheme());
            debug_assert!(registered.is_ok(), "standard scheme ids are distinct");
        }
        registry
    }

    /// Process-wide registry of the standard schemes, built on first use
    pub fn standard() -> &'static SchemeRegistry {
        &STANDARD
    }

    /// Register `scheme` under `id`; an id can only be registered once
    pub fn register(
        &mut self,
        id: impl Into<String>,
        scheme: VersioningScheme,
    ) -> Result<(), SchemeError> {
        let id = id.into();
        if self.schemes.contains_key(&id) {
            return Err(SchemeError::DuplicateScheme(id));
        }
        debug!("Registering versioning scheme '{}': {:?}", id, scheme);
        self.schemes.insert(id, scheme);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&VersioningScheme> {
        self.schemes.get(id)
    }

    /// Registered identifiers, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    fn scheme(&self, id: &str) -> Result<&VersioningScheme, SchemeError> {
        self.get(id)
            .ok_or_else(|| SchemeError::UnknownScheme(id.to_string()))
    }

    /// Parse `text` as a version of scheme `id`
    pub fn parse_version(&self, id: &str, text: &str) -> Result<AnyVersion, SchemeError> {
        Ok(self.scheme(id)?.parse_version(text)?)
    }

    /// Parse `text` as a version range of scheme `id`
    pub fn parse_range(&self, id: &str, text: &str) -> Result<AnyVersionRange, SchemeError> {
        let range = self
            .scheme(id)?
            .parse_range(text)
            .ok_or_else(|| SchemeError::RangesUnsupported(id.to_string()))??;
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::{RangeParseFailure, VersionRangeParseError};
    use crate::version::schemes::IntegerVersion;
    use rstest::rstest;

    #[test]
    fn standard_registry_lists_standard_schemes() {
        assert_eq!(SchemeRegistry::standard().ids(), vec!["integer", "semver"]);
    }

    #[test]
    fn with_standard_schemes_registers_each_scheme_under_its_id() {
        let registry = SchemeRegistry::with_standard_schemes();

        assert_eq!(registry.ids().len(), StandardScheme::all().len());
        for scheme in StandardScheme::all() {
            let registered = registry.get(scheme.as_str()).unwrap();
            assert_eq!(registered.name(), scheme.versioning_scheme().name());
            assert!(registered.supports_ranges());
        }
    }

    #[test]
    fn register_rejects_duplicate_ids() {
        let mut registry = SchemeRegistry::with_standard_schemes();

        let result =
            registry.register("integer", VersioningScheme::versions_only::<IntegerVersion>());

        assert_eq!(result, Err(SchemeError::DuplicateScheme("integer".to_string())));
        assert!(registry.get("integer").unwrap().supports_ranges());
    }

    #[test]
    fn register_adds_custom_scheme() {
        let mut registry = SchemeRegistry::new();
        registry
            .register("build-number", VersioningScheme::versions_only::<IntegerVersion>())
            .unwrap();

        let version = registry.parse_version("build-number", "12").unwrap();
        assert_eq!(version.to_string(), "12");
        assert_eq!(
            registry.parse_range("build-number", "[1,2]").unwrap_err(),
            SchemeError::RangesUnsupported("build-number".to_string())
        );
    }

    #[rstest]
    #[case("integer", "[4,7]", "5", true)]
    #[case("integer", "(4,7)", "7", false)]
    #[case("integer", "4", "4", true)]
    #[case("semver", "[1.2,2)", "1.9.9", true)]
    #[case("semver", "[1.2,2)", "2.0.0", false)]
    #[case("semver", "[1.2,2)", "2.0.0-rc.1", true)]
    #[case("semver", "(1.0.0,]", "1.0.0", false)]
    fn parse_range_matches_versions(
        #[case] scheme: &str,
        #[case] range: &str,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        let registry = SchemeRegistry::standard();
        let range = registry.parse_range(scheme, range).unwrap();
        let version = registry.parse_version(scheme, version).unwrap();

        assert_eq!(range.matches(&version), Ok(expected));
    }

    #[test]
    fn unknown_scheme_is_reported() {
        let registry = SchemeRegistry::standard();

        assert_eq!(
            registry.parse_version("maven", "1").unwrap_err(),
            SchemeError::UnknownScheme("maven".to_string())
        );
        assert_eq!(
            registry.parse_range("maven", "[1,2]").unwrap_err(),
            SchemeError::UnknownScheme("maven".to_string())
        );
    }

    #[test]
    fn parse_errors_are_forwarded() {
        let registry = SchemeRegistry::standard();

        assert!(matches!(
            registry.parse_version("integer", "4.1"),
            Err(SchemeError::Version(_))
        ));
        assert!(matches!(
            registry.parse_range("integer", "1,4"),
            Err(SchemeError::Range(VersionRangeParseError {
                reason: RangeParseFailure::CommaWithoutBoundaries,
                ..
            }))
        ));
    }
}
