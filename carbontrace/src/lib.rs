//! CarbonTrace - PCBA bill-of-materials embodied-carbon assessment library
//!
//! This library computes the total embodied-carbon emissions of a printed
//! circuit board assembly by cross-referencing a BOM against a published
//! emissions-coefficient table, producing per-line and aggregate figures.
//!
//! # Quick Start
//!
//! ```no_run
//! use carbontrace::{AssessmentOptions, CarbonTraceCore};
//! use std::path::Path;
//!
//! let options = AssessmentOptions::default();
//! let report = CarbonTraceCore::assess_bom_file(
//!     Path::new("pcba_bom.csv"),
//!     &options,
//! ).unwrap();
//!
//! for line in &report.lines {
//!     println!("{}: {} kg CO2e", line.part_number, line.kg_co2e);
//! }
//! println!("Total: {} kg CO2e", report.total_kg_co2e);
//! ```
//!
//! # Features
//!
//! - **BOM parsing**: header-driven column resolution, any column order
//! - **Coefficient matching**: by part number or designator category
//! - **Default-zero policy**: parts missing from the source contribute 0.0
//! - **Two report dialects**: plain CSV, or a collapsible markdown table

pub mod core;
pub mod emissions;
pub mod parser;
pub mod report;

// Re-export main types
pub use core::{
    AssessmentOptions, AssessmentReport, CarbonTraceCore, CarbonTraceError, EmissionLine,
};
pub use emissions::classifier::designator_category;
pub use emissions::matcher::{CoefficientMatcher, MatchMode};
pub use emissions::source::{EmissionsSource, DEFAULT_SOURCE_URL};
pub use emissions::table::EmissionsTable;
pub use parser::bom::BomParser;
pub use parser::schema::BomLineItem;
pub use report::render::ReportDialect;

/// Parse BOM CSV text (convenience wrapper).
pub fn parse_bom(text: &str) -> Result<Vec<BomLineItem>, CarbonTraceError> {
    BomParser::parse_str(text).map_err(|e| CarbonTraceError::Parse(e.to_string()))
}

/// Parse coefficient-table CSV text for a matching mode (convenience wrapper).
pub fn load_table(text: &str, mode: MatchMode) -> Result<EmissionsTable, CarbonTraceError> {
    EmissionsTable::parse(text, mode.table_has_header())
        .map_err(|e| CarbonTraceError::Parse(e.to_string()))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AssessmentOptions, AssessmentReport, CarbonTraceCore, CarbonTraceError, EmissionLine,
        MatchMode, ReportDialect,
    };
}
