use crate::schema::{COLUMNS, Column};
use chrono::NaiveDate;

/// One configuration period plus its six filter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRow {
    /// None when the period text could not be parsed; such a row never matches a lookup.
    pub date_begin: Option<NaiveDate>,
    /// None means the configuration is still in effect.
    pub date_end: Option<NaiveDate>,
    pub opt_top: String,
    pub opt_mid: String,
    pub opt_bot: String,
    pub ir_top: String,
    pub ir_mid: String,
    pub ir_bot: String,
}

/// A single field of a row, typed by its column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Date(Option<NaiveDate>),
    Text(&'a str),
}

impl ConfigRow {
    pub fn get(&self, column: Column) -> Cell<'_> {
        match column {
            Column::DateBegin => Cell::Date(self.date_begin),
            Column::DateEnd => Cell::Date(self.date_end),
            Column::OptTop => Cell::Text(&self.opt_top),
            Column::OptMid => Cell::Text(&self.opt_mid),
            Column::OptBot => Cell::Text(&self.opt_bot),
            Column::IrTop => Cell::Text(&self.ir_top),
            Column::IrMid => Cell::Text(&self.ir_mid),
            Column::IrBot => Cell::Text(&self.ir_bot),
        }
    }

    pub fn set_text(&mut self, column: Column, value: String) {
        match column {
            Column::OptTop => self.opt_top = value,
            Column::OptMid => self.opt_mid = value,
            Column::OptBot => self.opt_bot = value,
            Column::IrTop => self.ir_top = value,
            Column::IrMid => self.ir_mid = value,
            Column::IrBot => self.ir_bot = value,
            Column::DateBegin | Column::DateEnd => {}
        }
    }

    /// True if `date` falls inside `[date_begin, date_end]`, with a missing end
    /// treated as unbounded.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match self.date_begin {
            Some(begin) if begin <= date => self.date_end.is_none_or(|end| end >= date),
            _ => false,
        }
    }

    /// Row values as CSV fields, dates as `YYYY-MM-DD` and missing dates empty.
    pub fn to_record(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|&c| match self.get(c) {
                Cell::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
                Cell::Date(None) => String::new(),
                Cell::Text(s) => s.to_string(),
            })
            .collect()
    }
}

/// Ordered configuration rows plus the header label used for each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTable {
    labels: Vec<String>,
    rows: Vec<ConfigRow>,
}

impl ConfigTable {
    /// Table labelled with the canonical column names.
    pub fn new(rows: Vec<ConfigRow>) -> Self {
        let labels = COLUMNS.iter().map(|c| c.name().to_string()).collect();
        Self { labels, rows }
    }

    /// Table labelled with the headers found in a source file, in `COLUMNS` order.
    pub fn with_labels(labels: Vec<String>, rows: Vec<ConfigRow>) -> Self {
        debug_assert_eq!(labels.len(), COLUMNS.len());
        Self { labels, rows }
    }

    pub fn label(&self, column: Column) -> &str {
        COLUMNS
            .iter()
            .position(|&c| c == column)
            .and_then(|idx| self.labels.get(idx))
            .map(String::as_str)
            .unwrap_or(column.name())
    }

    pub fn rows(&self) -> &[ConfigRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
