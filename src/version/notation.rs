//! Interval notation parser
//!
//! Splits range strings such as `"[1.2,3.4)"`, `"(,7]"`, `"[4]"` or a bare
//! `"4"` into boundary kinds and raw version tokens. Tokens are passed
//! through uninterpreted; resolving them is up to the versioning scheme.
//!
//! Grammar, with insignificant whitespace around every part:
//!
//! ```text
//! range          := boundary-left? token? ','? token? boundary-right?
//! boundary-left  := '[' | '('
//! boundary-right := ']' | ')'
//! token          := one or more characters other than '[', '(', ']', ')', ','
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::boundary::BoundaryKind;
use crate::version::error::{RangeParseFailure, VersionRangeParseError};
use crate::version::interval::Interval;

/// Whole-string pattern for the interval notation.
///
/// Groups: 1 left boundary, 2 lower token, 3 comma, 4 upper token, 5 right boundary.
static INTERVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([(\[])?\s*([^\[(\]),]+)?\s*(,)?\s*([^\[(\]),]+)?\s*([)\]])?\s*$").unwrap()
});

/// Parser from interval notation to an `Interval<String>`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalNotationParser;

impl IntervalNotationParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a range string without resolving its version tokens.
    ///
    /// Tokens are trimmed; whitespace inside a token is kept verbatim. No
    /// ordering checks happen at this level.
    pub fn parse(&self, range: &str) -> Result<Interval<String>, VersionRangeParseError> {
        let fail = |reason: RangeParseFailure| {
            debug!("Rejected version range '{}': {}", range, reason);
            VersionRangeParseError::new(range, reason)
        };

        let Some(captures) = INTERVAL_RE.captures(range) else {
            return Err(fail(RangeParseFailure::InvalidFormat));
        };

        let group = |index: usize| captures.get(index).map(|m| m.as_str());
        let token = |index: usize| group(index).map(|s| s.trim().to_string());

        let lower_kind = BoundaryKind::from_symbol(group(1).unwrap_or_default())
            .map_err(|_| fail(RangeParseFailure::InvalidFormat))?;
        let upper_kind = BoundaryKind::from_symbol(group(5).unwrap_or_default())
            .map_err(|_| fail(RangeParseFailure::InvalidFormat))?;
        let has_comma = group(3).is_some();

        if lower_kind.is_omitted() != upper_kind.is_omitted() {
            return Err(fail(RangeParseFailure::UnbalancedBoundaries));
        }
        if lower_kind.is_omitted() && has_comma {
            return Err(fail(RangeParseFailure::CommaWithoutBoundaries));
        }

        let interval = match (lower_kind.is_omitted(), has_comma, token(2)) {
            // "[4]", "(4)", "[4)": one token bounds both ends
            (false, false, Some(value)) => Interval::single(lower_kind, value, upper_kind),
            _ => Interval::new(lower_kind, token(2), token(4), upper_kind),
        };

        interval.map_err(|e| fail(e.into()))
    }
}
