//! Core assessment pipeline shared by the library API and CLI.
//! No argument parsing or terminal output here.

use std::path::Path;

use crate::emissions::matcher::{CoefficientMatcher, MatchError, MatchMode};
use crate::emissions::source::{EmissionsSource, SourceError, DEFAULT_SOURCE_URL};
use crate::emissions::table::{EmissionsTable, TableParseError};
use crate::parser::bom::{BomParseError, BomParser};
use crate::parser::schema::BomLineItem;
use crate::report::render::{self, RenderError, ReportDialect};

#[derive(Debug, thiserror::Error)]
pub enum CarbonTraceError {
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Match error: {0}")]
    Match(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BomParseError> for CarbonTraceError {
    fn from(e: BomParseError) -> Self {
        CarbonTraceError::Parse(e.to_string())
    }
}

impl From<TableParseError> for CarbonTraceError {
    fn from(e: TableParseError) -> Self {
        CarbonTraceError::Parse(e.to_string())
    }
}

impl From<SourceError> for CarbonTraceError {
    fn from(e: SourceError) -> Self {
        CarbonTraceError::Fetch(e.to_string())
    }
}

impl From<MatchError> for CarbonTraceError {
    fn from(e: MatchError) -> Self {
        CarbonTraceError::Match(e.to_string())
    }
}

impl From<RenderError> for CarbonTraceError {
    fn from(e: RenderError) -> Self {
        CarbonTraceError::Render(e.to_string())
    }
}

/// Options for assessment runs (CLI or library).
#[derive(Clone, Debug)]
pub struct AssessmentOptions {
    pub match_mode: MatchMode,
    pub source_url: String,
    pub dialect: ReportDialect,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::PartNumber,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            dialect: ReportDialect::Csv,
        }
    }
}

/// Emission figure for one BOM line: per-unit coefficient times quantity.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EmissionLine {
    pub part_number: String,
    pub designator: String,
    pub quantity: u32,
    pub kg_co2e: f64,
}

/// Per-line figures in BOM order plus the aggregate total.
///
/// The total is produced by the same pass that produces the lines, so
/// re-summing `lines` reproduces it exactly.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AssessmentReport {
    pub lines: Vec<EmissionLine>,
    pub total_kg_co2e: f64,
}

impl AssessmentReport {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Render the report in the given dialect.
    pub fn render(&self, dialect: ReportDialect) -> Result<String, CarbonTraceError> {
        Ok(render::render(self, dialect)?)
    }
}

/// One pass over the line items: resolve each coefficient, weight it by
/// quantity, and thread the running total alongside the per-line output.
fn accumulate(
    items: &[BomLineItem],
    matcher: &CoefficientMatcher,
) -> Result<AssessmentReport, MatchError> {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = 0.0;
    for item in items {
        let coefficient = matcher.coefficient_for(item)?;
        let kg_co2e = coefficient * f64::from(item.quantity);
        total += kg_co2e;
        lines.push(EmissionLine {
            part_number: item.part_number.clone(),
            designator: item.designator.clone(),
            quantity: item.quantity,
            kg_co2e,
        });
    }
    Ok(AssessmentReport {
        lines,
        total_kg_co2e: total,
    })
}

/// Core assessment API used by both library consumers and the CLI.
pub struct CarbonTraceCore;

impl CarbonTraceCore {
    /// Assess BOM CSV text against coefficient-table CSV text.
    pub fn assess(
        bom_text: &str,
        table_text: &str,
        options: &AssessmentOptions,
    ) -> Result<AssessmentReport, CarbonTraceError> {
        let items = BomParser::parse_str(bom_text)?;
        Self::assess_line_items(&items, table_text, options)
    }

    /// Assess already-parsed line items against coefficient-table CSV text.
    pub fn assess_line_items(
        items: &[BomLineItem],
        table_text: &str,
        options: &AssessmentOptions,
    ) -> Result<AssessmentReport, CarbonTraceError> {
        let table = EmissionsTable::parse(table_text, options.match_mode.table_has_header())?;
        let matcher = CoefficientMatcher::new(table, options.match_mode);
        let report = accumulate(items, &matcher)?;
        tracing::info!(
            lines = report.lines.len(),
            total_kg_co2e = report.total_kg_co2e,
            "assessment complete"
        );
        Ok(report)
    }

    /// Assess a BOM file, fetching the coefficient table from the remote
    /// source. The BOM is read and parsed before the fetch, so a missing
    /// required column aborts without any network traffic.
    pub fn assess_bom_file(
        path: &Path,
        options: &AssessmentOptions,
    ) -> Result<AssessmentReport, CarbonTraceError> {
        let bom_text = std::fs::read_to_string(path)?;
        let items = BomParser::parse_str(&bom_text)?;
        let table_text = EmissionsSource::new(options.source_url.clone()).fetch()?;
        Self::assess_line_items(&items, &table_text, options)
    }
}
