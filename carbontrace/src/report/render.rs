//! Report rendering.
//!
//! One row pipeline, two dialects: plain CSV, and a pipe-delimited table
//! fenced by a collapsible disclosure block. The markdown dialect injects
//! an empty leading and trailing field into a copy of every row so the
//! delimiter-joined text reads as a valid pipe table; input rows are never
//! mutated.

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::core::{AssessmentReport, EmissionLine};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rendered report is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Output dialect for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDialect {
    #[default]
    Csv,
    Markdown,
}

/// Report header columns, in output order.
pub const REPORT_COLUMNS: [&str; 4] = ["Part Number", "Designator", "Quantity", "Emission"];

/// Render a report in the given dialect.
pub fn render(report: &AssessmentReport, dialect: ReportDialect) -> Result<String, RenderError> {
    match dialect {
        ReportDialect::Csv => render_csv(report),
        ReportDialect::Markdown => render_markdown(report),
    }
}

/// Trailing total line, shared by the markdown report and the CLI summary.
pub fn total_line(report: &AssessmentReport) -> String {
    format!(
        "Total emissions from BOM parts: {} kg CO2e",
        format_significant(report.total_kg_co2e, 2)
    )
}

/// Format a value to `figures` significant figures in plain decimal
/// notation: 4.6 -> "4.6", 0.025 -> "0.025", 123.45 -> "120".
pub fn format_significant(value: f64, figures: u32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value:.1}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(magnitude - figures as i32 + 1);
    let rounded = (value / scale).round() * scale;
    let decimals = (figures as i32 - 1 - magnitude).max(0) as usize;
    format!("{rounded:.decimals$}")
}

fn line_record(line: &EmissionLine) -> [String; 4] {
    [
        line.part_number.clone(),
        line.designator.clone(),
        line.quantity.to_string(),
        line.kg_co2e.to_string(),
    ]
}

fn render_csv(report: &AssessmentReport) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buf);
        writer.write_record(REPORT_COLUMNS)?;
        for line in &report.lines {
            writer.write_record(&line_record(line))?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

fn render_markdown(report: &AssessmentReport) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .delimiter(b'|')
            .quote_style(QuoteStyle::Never)
            .from_writer(&mut buf);

        let header: Vec<String> = REPORT_COLUMNS.iter().map(|c| c.to_string()).collect();
        writer.write_record(&pad(&header))?;
        let separator = vec!["---".to_string(); REPORT_COLUMNS.len()];
        writer.write_record(&pad(&separator))?;
        for line in &report.lines {
            writer.write_record(&pad(&line_record(line)))?;
        }
        writer.flush()?;
    }

    let table = String::from_utf8(buf)?;
    Ok(format!(
        "<details><summary>Data</summary>\n\n{}\n</details>\n\n{}\n",
        table,
        total_line(report)
    ))
}

/// Copy a row with empty leading and trailing fields injected, so the
/// pipe-joined text carries the table's outer delimiters.
fn pad(row: &[String]) -> Vec<String> {
    let mut padded = Vec::with_capacity(row.len() + 2);
    padded.push(String::new());
    padded.extend(row.iter().cloned());
    padded.push(String::new());
    padded
}
