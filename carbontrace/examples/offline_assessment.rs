//! Offline assessment example: run the pipeline over inline CSV text.

use carbontrace::prelude::*;

fn main() -> Result<(), CarbonTraceError> {
    let bom = "\
Part Number,Designator,Quantity
ERJ-3EKF1002V,R1,4
GRM155R71C104KA88D,C1,12
STM32F411CEU6,U1,1
";
    // Designator-category source schema: header row, category keys.
    let table = "\
Category,Coefficient
R,0.012
C,0.004
U,1.8
";

    let options = AssessmentOptions {
        match_mode: MatchMode::Designator,
        ..AssessmentOptions::default()
    };
    let report = CarbonTraceCore::assess(bom, table, &options)?;

    for line in &report.lines {
        println!(
            "{} ({} x{}): {} kg CO2e",
            line.part_number, line.designator, line.quantity, line.kg_co2e
        );
    }
    println!();
    println!("{}", report.render(ReportDialect::Markdown)?);
    Ok(())
}
