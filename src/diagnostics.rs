//! Structured warnings collected while extracting the configuration table.
//!
//! Nothing in the extractor is fatal: bad rows are dropped and bad periods
//! degrade to empty dates. Each of those events is recorded here so the
//! operator can audit what was lost instead of only seeing a row count.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum WarningKind {
    /// Row dropped: fewer cells than the schema needs.
    TooFewCells { found: usize, required: usize },
    /// Row kept with an empty `date_begin`.
    UnparsedStart,
    /// Row kept with an empty `date_end` although end text was present.
    UnparsedEnd,
    /// No header row starting with the period column was found.
    TableNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// 1-based line number in the markdown source (0 when not tied to a line).
    pub line: usize,
    /// 0-based index among the table's data rows.
    pub row: Option<usize>,
    #[serde(flatten)]
    pub kind: WarningKind,
    pub text: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::TooFewCells { found, required } => write!(
                f,
                "line {}: row dropped, {} cells (need {}): {:?}",
                self.line, found, required, self.text
            ),
            WarningKind::UnparsedStart => write!(
                f,
                "line {}: cannot parse period start, date_begin left empty: {:?}",
                self.line, self.text
            ),
            WarningKind::UnparsedEnd => write!(
                f,
                "line {}: cannot parse period end, date_end left empty: {:?}",
                self.line, self.text
            ),
            WarningKind::TableNotFound => write!(f, "configuration table not found"),
        }
    }
}

/// Summary of one `extract` run, written as JSON with `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rows_written: usize,
    pub warnings: Vec<Warning>,
}
