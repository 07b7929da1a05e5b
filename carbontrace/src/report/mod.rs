pub mod render;

// Re-export for convenience
pub use render::{
    format_significant, render, total_line, RenderError, ReportDialect, REPORT_COLUMNS,
};
