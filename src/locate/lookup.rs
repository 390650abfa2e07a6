use crate::schema::{ConfigRow, ConfigTable};
use chrono::NaiveDate;

/// Find the row in effect on `target`.
///
/// A row matches when `date_begin <= target` and its end is either missing or
/// `>= target`. When several rows match, the latest `date_begin` wins; rows
/// sharing that start resolve to the earliest one in table order.
pub fn find_configuration(table: &ConfigTable, target: NaiveDate) -> Option<&ConfigRow> {
    table
        .rows()
        .iter()
        .filter(|row| row.covers(target))
        .fold(None, |best: Option<&ConfigRow>, row| match best {
            Some(b) if b.date_begin >= row.date_begin => Some(b),
            _ => Some(row),
        })
}
