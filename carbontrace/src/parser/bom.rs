//! BOM CSV decoding.
//!
//! Column positions are resolved from the header row by case-insensitive
//! name matching, so the physical column order in the file is irrelevant.

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::parser::schema::BomLineItem;

/// Logical column names expected in the BOM header.
pub const PART_NUMBER_COLUMN: &str = "Part Number";
pub const DESIGNATOR_COLUMN: &str = "Designator";
pub const QUANTITY_COLUMN: &str = "Quantity";

#[derive(Debug, Error)]
pub enum BomParseError {
    #[error("required column \"{0}\" not found in BOM header")]
    MissingColumn(&'static str),
    #[error("BOM row {row} has {found} fields, expected at least {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("BOM row {row}: quantity \"{value}\" is not a non-negative integer")]
    BadQuantity { row: usize, value: String },
    #[error("BOM file has no header row")]
    EmptyFile,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Physical positions resolved for the required logical columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    part_number: usize,
    designator: usize,
    quantity: usize,
}

impl ColumnIndices {
    fn resolve(header: &StringRecord) -> Result<Self, BomParseError> {
        Ok(Self {
            part_number: find_column(header, PART_NUMBER_COLUMN)?,
            designator: find_column(header, DESIGNATOR_COLUMN)?,
            quantity: find_column(header, QUANTITY_COLUMN)?,
        })
    }

    /// Largest resolved index; rows must extend past it.
    fn max_index(&self) -> usize {
        self.part_number.max(self.designator).max(self.quantity)
    }
}

fn find_column(header: &StringRecord, name: &'static str) -> Result<usize, BomParseError> {
    header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case(name))
        .ok_or(BomParseError::MissingColumn(name))
}

/// Parser for comma-delimited, double-quote quoted BOM files.
pub struct BomParser;

impl BomParser {
    /// Decode BOM CSV text into ordered line items.
    ///
    /// Any malformed row aborts the whole parse; there is no
    /// skip-and-continue.
    pub fn parse_str(text: &str) -> Result<Vec<BomLineItem>, BomParseError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(BomParseError::EmptyFile),
        };
        let columns = ColumnIndices::resolve(&header)?;

        let mut items = Vec::new();
        for (i, record) in records.enumerate() {
            let record = record?;
            // 1-based row number counting the header as row 1.
            let row = i + 2;
            if record.len() <= columns.max_index() {
                return Err(BomParseError::MalformedRow {
                    row,
                    expected: columns.max_index() + 1,
                    found: record.len(),
                });
            }
            let quantity_raw = record[columns.quantity].trim();
            let quantity = quantity_raw
                .parse::<u32>()
                .map_err(|_| BomParseError::BadQuantity {
                    row,
                    value: quantity_raw.to_string(),
                })?;
            items.push(BomLineItem {
                part_number: record[columns.part_number].to_string(),
                designator: record[columns.designator].to_string(),
                quantity,
            });
        }
        Ok(items)
    }

    /// Read and decode a BOM file.
    pub fn parse_file(path: &std::path::Path) -> Result<Vec<BomLineItem>, BomParseError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_str(&text)
    }
}
