pub mod config;
pub mod logging;
pub mod version;

pub use version::boundary::BoundaryKind;
pub use version::error::{
    IntervalError, RangeParseFailure, SchemeError, SchemeMismatchError, VersionParseError,
    VersionRangeParseError,
};
pub use version::interval::Interval;
pub use version::notation::IntervalNotationParser;
pub use version::range::IntervalVersionRange;
pub use version::registry::SchemeRegistry;
pub use version::scheme::{AnyVersion, AnyVersionRange, StandardScheme, VersioningScheme};
pub use version::schemes::{
    IntegerVersion, IntegerVersionParser, IntegerVersionRange, SemanticVersion,
    SemanticVersionParser, SemanticVersionRange,
};
pub use version::traits::{Version, VersionParser, VersionRange};
