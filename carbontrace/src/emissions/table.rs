//! Coefficient table decoding.

use std::collections::HashMap;

use csv::ReaderBuilder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableParseError {
    #[error("coefficient record {record} has {found} fields, expected at least 2")]
    ShortRecord { record: usize, found: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// In-memory mapping from part number or designator category to the raw
/// coefficient string published by the source.
///
/// Values are stored exactly as the source publishes them; trimming and
/// unquoting is the matcher's concern. Duplicate keys overwrite silently,
/// last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmissionsTable {
    entries: HashMap<String, String>,
}

impl EmissionsTable {
    /// Decode coefficient CSV text. `skip_header` drops record 0, for the
    /// designator-category source schema that carries a header row.
    pub fn parse(text: &str, skip_header: bool) -> Result<Self, TableParseError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(skip_header)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut entries = HashMap::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                return Err(TableParseError::ShortRecord {
                    record: i,
                    found: record.len(),
                });
            }
            entries.insert(record[0].to_string(), record[1].to_string());
        }
        tracing::debug!(entries = entries.len(), "coefficient table loaded");
        Ok(Self { entries })
    }

    /// Raw coefficient string for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for EmissionsTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
