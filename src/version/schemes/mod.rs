//! Concrete versioning schemes

pub mod integer;
pub mod semantic;

pub use integer::{IntegerVersion, IntegerVersionParser, IntegerVersionRange};
pub use semantic::{SemanticVersion, SemanticVersionParser, SemanticVersionRange};
