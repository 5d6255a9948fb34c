//! Interval boundary kinds and their notation symbols

use serde::Serialize;

/// How an interval endpoint treats its bound value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// `[` / `]`: the bound value itself is part of the range
    Inclusive,
    /// `(` / `)`: the bound value itself is not part of the range
    Exclusive,
    /// No boundary symbol at all (bare version token)
    Omitted,
}

/// Raised for boundary strings that are not one of the known symbols
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown boundary symbol: '{0}'")]
pub struct UnknownBoundarySymbol(pub String);

impl BoundaryKind {
    /// Symbol used when this kind bounds the lower end
    pub fn lower_symbol(&self) -> Option<char> {
        match self {
            BoundaryKind::Inclusive => Some('['),
            BoundaryKind::Exclusive => Some('('),
            BoundaryKind::Omitted => None,
        }
    }

    /// Symbol used when this kind bounds the upper end
    pub fn upper_symbol(&self) -> Option<char> {
        match self {
            BoundaryKind::Inclusive => Some(']'),
            BoundaryKind::Exclusive => Some(')'),
            BoundaryKind::Omitted => None,
        }
    }

    /// Determine the boundary kind for a matched boundary string.
    ///
    /// An empty string means the boundary was omitted; anything else must be
    /// exactly one of `[`, `]`, `(` or `)`.
    pub fn from_symbol(symbol: &str) -> Result<Self, UnknownBoundarySymbol> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(BoundaryKind::Omitted),
            (Some('[' | ']'), None) => Ok(BoundaryKind::Inclusive),
            (Some('(' | ')'), None) => Ok(BoundaryKind::Exclusive),
            _ => Err(UnknownBoundarySymbol(symbol.to_string())),
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, BoundaryKind::Omitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", BoundaryKind::Omitted)]
    #[case("[", BoundaryKind::Inclusive)]
    #[case("]", BoundaryKind::Inclusive)]
    #[case("(", BoundaryKind::Exclusive)]
    #[case(")", BoundaryKind::Exclusive)]
    fn from_symbol_returns_expected(#[case] symbol: &str, #[case] expected: BoundaryKind) {
        assert_eq!(BoundaryKind::from_symbol(symbol), Ok(expected));
    }

    #[rstest]
    #[case("{")]
    #[case("[[")]
    #[case("[)")]
    #[case(",")]
    fn from_symbol_rejects_unknown_symbols(#[case] symbol: &str) {
        assert_eq!(
            BoundaryKind::from_symbol(symbol),
            Err(UnknownBoundarySymbol(symbol.to_string()))
        );
    }

    #[test]
    fn omitted_has_no_symbols() {
        assert_eq!(BoundaryKind::Omitted.lower_symbol(), None);
        assert_eq!(BoundaryKind::Omitted.upper_symbol(), None);
        assert_eq!(BoundaryKind::Inclusive.lower_symbol(), Some('['));
        assert_eq!(BoundaryKind::Exclusive.upper_symbol(), Some(')'));
    }
}
