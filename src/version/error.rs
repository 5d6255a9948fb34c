use thiserror::Error;

/// A string could not be interpreted as a version of a given scheme
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The version string '{text}' could not be parsed into a {scheme} version: {reason}")]
pub struct VersionParseError {
    /// The offending input, verbatim
    pub text: String,
    /// Identifier of the scheme that was attempted
    pub scheme: &'static str,
    /// Human readable cause
    pub reason: String,
}

impl VersionParseError {
    pub fn new(text: impl Into<String>, scheme: &'static str, reason: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scheme,
            reason: reason.into(),
        }
    }
}

/// Structural problems with an interval's kinds and bound values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("unbalanced boundary symbols: {lower:?} lower with {upper:?} upper")]
    UnbalancedBoundaries {
        lower: crate::version::boundary::BoundaryKind,
        upper: crate::version::boundary::BoundaryKind,
    },

    #[error("a range without boundary symbols needs a version")]
    MissingVersion,

    #[error("a range without boundary symbols cannot have an upper version")]
    UnexpectedUpperVersion,

    #[error("at least one of the lower and upper versions must be present")]
    NoBounds,

    #[error("the lower version '{lower}' is greater than the upper version '{upper}'")]
    InvertedBounds { lower: String, upper: String },
}

/// Why a range string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseFailure {
    #[error("invalid range format")]
    InvalidFormat,

    #[error("unbalanced boundary symbols")]
    UnbalancedBoundaries,

    #[error("a comma is only allowed between boundary symbols")]
    CommaWithoutBoundaries,

    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error("invalid version")]
    InvalidVersion(#[source] VersionParseError),
}

/// A string could not be interpreted as a version range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The version range string '{range}' could not be parsed: {reason}")]
pub struct VersionRangeParseError {
    /// The full original range string
    pub range: String,
    #[source]
    pub reason: RangeParseFailure,
}

impl VersionRangeParseError {
    pub fn new(range: impl Into<String>, reason: impl Into<RangeParseFailure>) -> Self {
        Self {
            range: range.into(),
            reason: reason.into(),
        }
    }
}

/// Two type-erased values from different schemes were compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compare a {found} version against the {expected} scheme")]
pub struct SchemeMismatchError {
    pub expected: &'static str,
    pub found: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("Unknown versioning scheme: {0}")]
    UnknownScheme(String),

    #[error("Versioning scheme '{0}' does not support ranges")]
    RangesUnsupported(String),

    #[error("Versioning scheme '{0}' is already registered")]
    DuplicateScheme(String),

    #[error(transparent)]
    Version(#[from] VersionParseError),

    #[error(transparent)]
    Range(#[from] VersionRangeParseError),
}
