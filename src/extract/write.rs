use crate::schema::{COLUMNS, ConfigTable};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Write the table as CSV with the canonical header, creating parent
/// directories as needed. An existing file is overwritten.
pub fn write_table_csv(path: &Path, table: &ConfigTable) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("open {} for writing", path.display()))?;

    writer.write_record(COLUMNS.iter().map(|c| c.name()))?;
    for row in table.rows() {
        writer.write_record(row.to_record())?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;

    Ok(())
}
