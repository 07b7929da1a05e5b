pub mod bom;
pub mod schema;

// Re-export for convenience
pub use bom::{BomParseError, BomParser};
pub use schema::*;
