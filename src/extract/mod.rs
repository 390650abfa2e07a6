//! Markdown table to CSV schedule.

pub mod period;
pub mod table;
pub mod write;

pub use table::{Extraction, extract_table};
pub use write::write_table_csv;

use crate::diagnostics::ExtractReport;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read `input`, extract the configuration table and write it to `output`.
pub fn convert_file(input: &Path, output: &Path) -> anyhow::Result<ExtractReport> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("read markdown file {}", input.display()))?;

    let Extraction { table, warnings } = extract_table(&markdown);
    write_table_csv(output, &table)?;
    info!(
        rows = table.len(),
        warnings = warnings.len(),
        "wrote {}",
        output.display()
    );

    Ok(ExtractReport {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        rows_written: table.len(),
        warnings,
    })
}

/// Write the extraction report as pretty JSON.
pub fn write_report(path: &Path, report: &ExtractReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
