//! BOM data model.

use serde::Serialize;

/// One line item decoded from the BOM.
///
/// `quantity` is the number of placements of this part on the assembly;
/// it must decode as a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomLineItem {
    pub part_number: String,
    pub designator: String,
    pub quantity: u32,
}
