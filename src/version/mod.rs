//! Version identifiers, interval-notation ranges and range matching
//!
//! # Architecture
//!
//! ```text
//! "[1,4)" ──▶ ┌──────────────┐ Interval<String> ┌──────────────┐ Interval<V>
//!             │   Notation   │─────────────────▶│    Scheme    │────────────┐
//!             │   (parser)   │                  │ (token parse)│            │
//!             └──────────────┘                  └──────────────┘            ▼
//!                                                                 ┌──────────────────┐
//!                          version ──────────────────────────────▶│ IntervalVersion- │
//!                                                                 │ Range (matches)  │
//!                                                                 └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`boundary`]: Inclusive / exclusive / omitted boundary kinds
//! - [`interval`]: Bound values plus kinds, and the membership check
//! - [`notation`]: Interval-notation parser producing `Interval<String>`
//! - [`range`]: `IntervalVersionRange`, the interval-backed range
//! - [`traits`]: `Version`, `VersionParser` and `VersionRange` traits
//! - [`schemes`]: Concrete schemes (integer, semver)
//! - [`scheme`]: Versioning schemes and type-erased versions/ranges
//! - [`registry`]: Scheme lookup by identifier
//! - [`error`]: Error types for parsing and scheme lookup

pub mod boundary;
pub mod error;
pub mod interval;
pub mod notation;
pub mod range;
pub mod registry;
pub mod scheme;
pub mod schemes;
pub mod traits;
