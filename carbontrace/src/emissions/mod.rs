//! Emissions reference table, remote source, and coefficient matching.

pub mod classifier;
pub mod matcher;
pub mod source;
pub mod table;

// Re-export for convenience
pub use classifier::designator_category;
pub use matcher::{CoefficientMatcher, MatchError, MatchMode};
pub use source::{EmissionsSource, SourceError, DEFAULT_SOURCE_URL};
pub use table::{EmissionsTable, TableParseError};
