//! CarbonTrace CLI - PCBA BOM embodied-carbon assessment from the command line.

use carbontrace::report::total_line;
use carbontrace::{
    AssessmentOptions, BomParser, CarbonTraceCore, CarbonTraceError, EmissionsSource, MatchMode,
    ReportDialect, DEFAULT_SOURCE_URL,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carbontrace")]
#[command(about = "PCBA bill-of-materials embodied-carbon assessment", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the BOM file
    #[arg(value_name = "BOM_FILE")]
    bom_file: PathBuf,

    /// Write the rendered report to this path
    #[arg(long = "output_file", value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Render the report as a collapsible markdown table
    /// (yes/no/true/false/t/f/y/n/1/0)
    #[arg(
        long = "markdown",
        value_name = "BOOL",
        value_parser = parse_bool_token,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value = "no",
        default_missing_value = "yes"
    )]
    markdown: bool,

    /// BOM identity matched against the coefficient table
    #[arg(long = "match_by", value_enum, default_value = "part-number")]
    match_by: MatchBy,

    /// Coefficient table URL
    #[arg(long = "source_url", value_name = "URL", default_value = DEFAULT_SOURCE_URL)]
    source_url: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum MatchBy {
    /// Exact manufacturer part number lookup
    PartNumber,
    /// Reference-designator category lookup
    Designator,
}

impl From<MatchBy> for MatchMode {
    fn from(m: MatchBy) -> Self {
        match m {
            MatchBy::PartNumber => MatchMode::PartNumber,
            MatchBy::Designator => MatchMode::Designator,
        }
    }
}

/// Boolean-like CLI token, case-insensitive.
fn parse_bool_token(token: &str) -> Result<bool, String> {
    match token.to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        other => Err(format!("\"{other}\" is not a yes/no token")),
    }
}

fn main() {
    // Diagnostics go to stderr so stdout stays a clean progress/report
    // stream; raise with RUST_LOG=info when needed.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<(), CarbonTraceError> {
    let options = AssessmentOptions {
        match_mode: cli.match_by.into(),
        source_url: cli.source_url.clone(),
        dialect: if cli.markdown {
            ReportDialect::Markdown
        } else {
            ReportDialect::Csv
        },
    };

    // The BOM is parsed before anything touches the network, so a schema
    // error aborts with no fetch and no output.
    let items = BomParser::parse_file(&cli.bom_file)?;

    println!("- Fetching carbon emissions data from demo data source");
    println!();

    let table_text = EmissionsSource::new(options.source_url.clone()).fetch()?;
    let report = CarbonTraceCore::assess_line_items(&items, &table_text, &options)?;

    for line in &report.lines {
        println!("- Fetching info for {}... {}", line.part_number, line.kg_co2e);
    }
    println!();
    println!("{}", total_line(&report));

    // The report file is written only after the whole computation
    // succeeded; a failed run leaves nothing on disk.
    if let Some(path) = &cli.output_file {
        let rendered = report.render(options.dialect)?;
        std::fs::write(path, rendered)?;
    }
    Ok(())
}
