//! Locate the configuration table in a markdown document and turn its data
//! rows into [`ConfigRow`]s.
//!
//! Expected shape:
//!
//! | Periods (mm/dd/yy)        | Opt Top | Opt Mid | Opt Bot | IR Top | IR Mid | IR Bot |
//! | :---                      | :---    | :---    | :---    | :---   | :---   | :---   |
//! | 02/01/14&ndash;11/30/19   | g       | r       | i       | z      | y      | NB921  |
//!
//! The table ends at the first blank or non-`|` line after its data rows
//! begin; anything below it is ignored.

use crate::diagnostics::{Warning, WarningKind};
use crate::extract::period::parse_period;
use crate::schema::{COLUMNS, ConfigRow, ConfigTable};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// First cell of the header row.
pub const HEADER_PREFIX: &str = "Periods (mm/dd/yy)";

/// Period cell plus six settings.
pub const MIN_CELLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    Searching,
    Header,
    Body,
    Ended,
}

/// Rows pulled from one document together with what went wrong on the way.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: ConfigTable,
    pub warnings: Vec<Warning>,
}

/// Split a markdown row into trimmed cells, dropping the empty cells produced
/// by leading and trailing delimiters.
pub fn split_row(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn is_separator_row(cells: &[&str]) -> bool {
    static SEP_CELL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").expect("valid regex"));

    !cells.is_empty() && cells.iter().all(|c| SEP_CELL_RE.is_match(c))
}

fn is_header_row(line: &str) -> bool {
    line.starts_with('|')
        && split_row(line)
            .first()
            .is_some_and(|c| c.starts_with(HEADER_PREFIX))
}

/// Extract the configuration table from markdown text.
pub fn extract_table(markdown: &str) -> Extraction {
    let mut state = TableState::Searching;
    let mut rows: Vec<ConfigRow> = Vec::new();
    let mut warnings: Vec<Warning> = Vec::new();
    let mut data_index = 0usize;

    for (lineno, raw) in markdown.lines().enumerate() {
        let lno = lineno + 1;
        let line = raw.trim();

        match state {
            TableState::Searching => {
                if is_header_row(line) {
                    debug!(line = lno, "found configuration table header");
                    state = TableState::Header;
                }
                continue;
            }
            TableState::Ended => break,
            TableState::Header | TableState::Body => {}
        }

        if line.is_empty() {
            if state == TableState::Body {
                state = TableState::Ended;
            }
            continue;
        }
        if !line.starts_with('|') {
            state = TableState::Ended;
            continue;
        }

        let cells = split_row(line);
        if is_separator_row(&cells) {
            continue;
        }
        state = TableState::Body;

        let row_index = data_index;
        data_index += 1;

        if cells.len() < MIN_CELLS {
            let w = Warning {
                line: lno,
                row: Some(row_index),
                kind: WarningKind::TooFewCells {
                    found: cells.len(),
                    required: MIN_CELLS,
                },
                text: line.to_string(),
            };
            warn!("{}", w);
            warnings.push(w);
            continue;
        }
        if cells.len() > MIN_CELLS {
            debug!(line = lno, extra = cells.len() - MIN_CELLS, "ignoring extra cells");
        }

        let period_text = cells[0];
        let period = parse_period(period_text);
        debug!(line = lno, period = ?period.to_iso(), "parsed period");
        if period.start.is_none() {
            let w = Warning {
                line: lno,
                row: Some(row_index),
                kind: WarningKind::UnparsedStart,
                text: period_text.to_string(),
            };
            warn!("{}", w);
            warnings.push(w);
        }
        if period.end.is_none() && !period.open_ended {
            let w = Warning {
                line: lno,
                row: Some(row_index),
                kind: WarningKind::UnparsedEnd,
                text: period_text.to_string(),
            };
            warn!("{}", w);
            warnings.push(w);
        }

        let mut row = ConfigRow {
            date_begin: period.start,
            date_end: period.end,
            ..ConfigRow::default()
        };
        // COLUMNS[2..] are the six settings, in table order.
        for (&column, &cell) in COLUMNS[2..].iter().zip(&cells[1..MIN_CELLS]) {
            row.set_text(column, cell.to_string());
        }
        rows.push(row);
    }

    if state == TableState::Searching {
        let w = Warning {
            line: 0,
            row: None,
            kind: WarningKind::TableNotFound,
            text: HEADER_PREFIX.to_string(),
        };
        warn!("{}", w);
        warnings.push(w);
    }

    Extraction {
        table: ConfigTable::new(rows),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::WarningKind;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "| Periods (mm/dd/yy) | Opt Top | Opt Mid | Opt Bot | IR Top | IR Mid | IR Bot |\n\
                          | :--- | :---: | :--- | :--- | ---: | :--- | :--- |\n";

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn split_row_drops_outer_empty_cells() {
        assert_eq!(split_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_row("a | b"), vec!["a", "b"]);
        assert_eq!(split_row("| a |  | c |"), vec!["a", "", "c"]);
        assert_eq!(split_row("|"), Vec::<&str>::new());
    }

    #[test]
    fn extracts_rows_in_source_order() {
        let md = format!(
            "# HSC FEU\n\nSome text.\n\n{HEADER}\
             | 02/01/14&ndash;11/30/19 | g | r | i | z | y | NB921 |\n\
             | 1/6/24&ndash; | g | r2 | i2 | z | Y | NB387 |\n"
        );
        let out = extract_table(&md);
        let rows = out.table.rows();
        assert_eq!(rows.len(), 2);
        assert!(out.warnings.is_empty());

        assert_eq!(rows[0].date_begin, d(2014, 2, 1));
        assert_eq!(rows[0].date_end, d(2019, 11, 30));
        assert_eq!(rows[0].ir_bot, "NB921");

        assert_eq!(rows[1].date_begin, d(2024, 1, 6));
        assert_eq!(rows[1].date_end, None);
        assert_eq!(
            rows[1].to_record(),
            vec!["2024-01-06", "", "g", "r2", "i2", "z", "Y", "NB387"]
        );
    }

    #[test]
    fn short_row_is_dropped_with_warning() {
        let md = format!("{HEADER}| text |\n");
        let out = extract_table(&md);
        assert_eq!(out.table.len(), 0);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].line, 3);
        assert_eq!(out.warnings[0].row, Some(0));
        assert_eq!(
            out.warnings[0].kind,
            WarningKind::TooFewCells {
                found: 1,
                required: MIN_CELLS
            }
        );
    }

    #[test]
    fn extra_cells_are_ignored() {
        let md = format!("{HEADER}| 01/01/20&ndash; | a | b | c | d | e | f | note |\n");
        let out = extract_table(&md);
        assert_eq!(out.table.len(), 1);
        assert_eq!(out.table.rows()[0].ir_bot, "f");
    }

    #[test]
    fn second_table_below_is_not_ingested() {
        let md = format!(
            "{HEADER}| 01/01/20&ndash;12/31/20 | a | b | c | d | e | f |\n\
             \n\
             ## Other\n\
             \n\
             | 01/01/21&ndash; | x | x | x | x | x | x |\n"
        );
        let out = extract_table(&md);
        assert_eq!(out.table.len(), 1);
        assert_eq!(out.table.rows()[0].opt_top, "a");
    }

    #[test]
    fn text_line_directly_after_rows_ends_table() {
        let md = format!(
            "{HEADER}| 01/01/20&ndash; | a | b | c | d | e | f |\n\
             Footnote\n\
             | 01/01/21&ndash; | x | x | x | x | x | x |\n"
        );
        assert_eq!(extract_table(&md).table.len(), 1);
    }

    #[test]
    fn blank_lines_before_first_row_are_skipped() {
        let md = format!("{HEADER}\n| 01/01/20&ndash; | a | b | c | d | e | f |\n");
        assert_eq!(extract_table(&md).table.len(), 1);
    }

    #[test]
    fn unparseable_period_is_kept_and_reported() {
        let md = format!(
            "{HEADER}| TBD | a | b | c | d | e | f |\n\
             | 01/01/20&ndash;soon | a | b | c | d | e | f |\n"
        );
        let out = extract_table(&md);
        assert_eq!(out.table.len(), 2);
        assert_eq!(out.table.rows()[0].date_begin, None);
        let kinds: Vec<_> = out.warnings.iter().map(|w| (w.row, w.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (Some(0), WarningKind::UnparsedStart),
                (Some(1), WarningKind::UnparsedEnd),
            ]
        );
    }

    #[test]
    fn missing_header_yields_empty_table() {
        let out = extract_table("| a | b | c | d | e | f | g |\n");
        assert!(out.table.is_empty());
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].kind, WarningKind::TableNotFound);
    }
}
