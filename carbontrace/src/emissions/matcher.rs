//! Coefficient matching strategies.
//!
//! One strategy is selected per run, not per line. A key absent from the
//! table is never an error: unknown parts resolve to a coefficient of 0.0
//! so the aggregate report still completes.

use thiserror::Error;

use crate::emissions::classifier::designator_category;
use crate::emissions::table::EmissionsTable;
use crate::parser::schema::BomLineItem;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("designator \"{0}\" has no leading category prefix")]
    UnclassifiableDesignator(String),
    #[error("coefficient \"{value}\" for key \"{key}\" is not a number")]
    BadCoefficient { key: String, value: String },
}

/// Which BOM identity is matched against the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact manufacturer part number lookup (headerless source schema).
    PartNumber,
    /// Reference-designator category lookup (source schema with header row).
    Designator,
}

impl MatchMode {
    /// Whether the coefficient source for this mode carries a header row.
    pub fn table_has_header(self) -> bool {
        matches!(self, MatchMode::Designator)
    }
}

/// Resolves BOM line items to per-unit emission coefficients.
pub struct CoefficientMatcher {
    table: EmissionsTable,
    mode: MatchMode,
}

impl CoefficientMatcher {
    pub fn new(table: EmissionsTable, mode: MatchMode) -> Self {
        Self { table, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Per-unit coefficient for a line item, or 0.0 when the key is absent
    /// from the table.
    pub fn coefficient_for(&self, item: &BomLineItem) -> Result<f64, MatchError> {
        match self.mode {
            MatchMode::PartNumber => match self.table.get(&item.part_number) {
                // Part-number sources wrap some figures in quotes that
                // survive CSV decoding; strip them before parsing.
                Some(raw) => {
                    let cleaned = raw.trim().replace('"', "");
                    parse_coefficient(&item.part_number, &cleaned)
                }
                None => Ok(0.0),
            },
            MatchMode::Designator => {
                let category = designator_category(&item.designator)?;
                match self.table.get(category) {
                    Some(raw) => parse_coefficient(category, raw.trim()),
                    None => Ok(0.0),
                }
            }
        }
    }
}

fn parse_coefficient(key: &str, value: &str) -> Result<f64, MatchError> {
    value.parse::<f64>().map_err(|_| MatchError::BadCoefficient {
        key: key.to_string(),
        value: value.to_string(),
    })
}
