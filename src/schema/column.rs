//! Column definitions for the configuration schedule.
//!
//! Example header as written by `extract`:
//! date_begin,date_end,opt_top,opt_mid,opt_bot,ir_top,ir_mid,ir_bot

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    DateBegin,
    DateEnd,
    OptTop,
    OptMid,
    OptBot,
    IrTop,
    IrMid,
    IrBot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Text,
}

/// All columns in file order.
pub const COLUMNS: [Column; 8] = [
    Column::DateBegin,
    Column::DateEnd,
    Column::OptTop,
    Column::OptMid,
    Column::OptBot,
    Column::IrTop,
    Column::IrMid,
    Column::IrBot,
];

impl Column {
    /// Canonical header name.
    pub fn name(self) -> &'static str {
        match self {
            Column::DateBegin => "date_begin",
            Column::DateEnd => "date_end",
            Column::OptTop => "opt_top",
            Column::OptMid => "opt_mid",
            Column::OptBot => "opt_bot",
            Column::IrTop => "ir_top",
            Column::IrMid => "ir_mid",
            Column::IrBot => "ir_bot",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::DateBegin | Column::DateEnd => ColumnKind::Date,
            _ => ColumnKind::Text,
        }
    }

    /// Only the start of a period is mandatory; an empty end means "still in effect".
    pub fn nullable(self) -> bool {
        !matches!(self, Column::DateBegin)
    }

    /// Resolve a header cell to a column.
    ///
    /// Matching ignores case and treats spaces, hyphens and underscores alike,
    /// so "Date Begin", "date_begin" and "DATE-BEGIN" are the same column.
    pub fn from_header(header: &str) -> Option<Column> {
        let key = normalize_header(header);
        COLUMNS.into_iter().find(|c| c.name() == key)
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
