//! Structured form of an interval-notation range

use std::fmt;

use serde::Serialize;

use crate::version::boundary::BoundaryKind;
use crate::version::error::IntervalError;

/// A pair of optional bound values and their boundary kinds.
///
/// `V` is `String` straight out of the notation parser and a concrete
/// [`Version`](crate::version::traits::Version) once tokens are resolved.
///
/// Shape invariants, checked on construction:
/// - both kinds are [`BoundaryKind::Omitted`] or neither is
/// - the omitted form carries a lower value and no upper value
/// - the symbolic form carries at least one value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval<V> {
    lower_kind: BoundaryKind,
    lower: Option<V>,
    upper: Option<V>,
    upper_kind: BoundaryKind,
}

impl<V> Interval<V> {
    /// Build an interval, validating its shape but not the order of its values
    pub fn new(
        lower_kind: BoundaryKind,
        lower: Option<V>,
        upper: Option<V>,
        upper_kind: BoundaryKind,
    ) -> Result<Self, IntervalError> {
        if lower_kind.is_omitted() != upper_kind.is_omitted() {
            return Err(IntervalError::UnbalancedBoundaries {
                lower: lower_kind,
                upper: upper_kind,
            });
        }

        if lower_kind.is_omitted() {
            if lower.is_none() {
                return Err(IntervalError::MissingVersion);
            }
            if upper.is_some() {
                return Err(IntervalError::UnexpectedUpperVersion);
            }
        } else if lower.is_none() && upper.is_none() {
            return Err(IntervalError::NoBounds);
        }

        Ok(Self {
            lower_kind,
            lower,
            upper,
            upper_kind,
        })
    }

    /// Bare version (`"4"`): everything from `lower` upwards
    pub fn at_least(lower: V) -> Self {
        Self {
            lower_kind: BoundaryKind::Omitted,
            lower: Some(lower),
            upper: None,
            upper_kind: BoundaryKind::Omitted,
        }
    }

    /// Single value between boundary symbols (`"[4]"`, `"[4)"`).
    ///
    /// The same value bounds both ends; mismatched kinds therefore produce an
    /// interval that matches nothing.
    pub fn single(
        lower_kind: BoundaryKind,
        value: V,
        upper_kind: BoundaryKind,
    ) -> Result<Self, IntervalError>
    where
        V: Clone,
    {
        if lower_kind.is_omitted() || upper_kind.is_omitted() {
            return Err(IntervalError::UnbalancedBoundaries {
                lower: lower_kind,
                upper: upper_kind,
            });
        }
        Self::new(lower_kind, Some(value.clone()), Some(value), upper_kind)
    }

    pub fn lower_kind(&self) -> BoundaryKind {
        self.lower_kind
    }

    pub fn lower(&self) -> Option<&V> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&V> {
        self.upper.as_ref()
    }

    pub fn upper_kind(&self) -> BoundaryKind {
        self.upper_kind
    }

    /// Resolve each bound value independently, keeping kinds untouched.
    ///
    /// The result is not re-validated for order; callers holding ordered
    /// values go through [`Interval::ordered`].
    pub fn try_map<U, E>(self, mut f: impl FnMut(V) -> Result<U, E>) -> Result<Interval<U>, E> {
        let lower = self.lower.map(&mut f).transpose()?;
        let upper = self.upper.map(&mut f).transpose()?;
        Ok(Interval {
            lower_kind: self.lower_kind,
            lower,
            upper,
            upper_kind: self.upper_kind,
        })
    }
}

impl<V: Ord + fmt::Display> Interval<V> {
    /// Build an interval and additionally require `lower <= upper`
    pub fn ordered(
        lower_kind: BoundaryKind,
        lower: Option<V>,
        upper: Option<V>,
        upper_kind: BoundaryKind,
    ) -> Result<Self, IntervalError> {
        Self::new(lower_kind, lower, upper, upper_kind)?.check_order()
    }

    /// Reject intervals whose lower value is greater than their upper value
    pub fn check_order(self) -> Result<Self, IntervalError> {
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper)
            && lower > upper
        {
            return Err(IntervalError::InvertedBounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(self)
    }
}

impl<V: Ord> Interval<V> {
    /// Check whether `version` lies inside the interval
    pub fn contains(&self, version: &V) -> bool {
        self.admits_lower(version) && self.admits_upper(version)
    }

    fn admits_lower(&self, version: &V) -> bool {
        let Some(lower) = &self.lower else {
            return true;
        };
        match self.lower_kind {
            // Omitted bounds behave as inclusive ones
            BoundaryKind::Omitted | BoundaryKind::Inclusive => version >= lower,
            BoundaryKind::Exclusive => version > lower,
        }
    }

    fn admits_upper(&self, version: &V) -> bool {
        let Some(upper) = &self.upper else {
            return true;
        };
        match self.upper_kind {
            BoundaryKind::Omitted | BoundaryKind::Inclusive => version <= upper,
            BoundaryKind::Exclusive => version < upper,
        }
    }
}

/// Canonical notation: `[1,4)`, `(,7]`, or a bare `2`
impl<V: fmt::Display> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lower_kind.is_omitted() {
            if let Some(lower) = &self.lower {
                write!(f, "{lower}")?;
            }
            return Ok(());
        }

        if let Some(symbol) = self.lower_kind.lower_symbol() {
            write!(f, "{symbol}")?;
        }
        if let Some(lower) = &self.lower {
            write!(f, "{lower}")?;
        }
        f.write_str(",")?;
        if let Some(upper) = &self.upper {
            write!(f, "{upper}")?;
        }
        if let Some(symbol) = self.upper_kind.upper_symbol() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
