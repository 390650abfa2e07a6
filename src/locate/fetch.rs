//! Load the configuration schedule from a URL or a local file.

use crate::error::FetchError;
use crate::schema::{COLUMNS, Cell, Column, ColumnKind, ConfigRow, ConfigTable};
use chrono::NaiveDate;
use regex::Regex;
use std::io::Read;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info};

/// Where the schedule comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(String),
    File(PathBuf),
}

impl Source {
    /// `http(s)://` is fetched over the network; `file://` and anything else
    /// is treated as a local path.
    pub fn parse(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Http(s.to_string())
        } else if let Some(path) = s.strip_prefix("file://") {
            Source::File(PathBuf::from(path))
        } else {
            Source::File(PathBuf::from(s))
        }
    }
}

/// Fetch and parse the schedule. `timeout` of None waits indefinitely.
pub fn fetch_table(source: &str, timeout: Option<Duration>) -> Result<ConfigTable, FetchError> {
    let body = match Source::parse(source) {
        Source::Http(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?;
            info!(%url, "fetching schedule");
            client.get(&url).send()?.error_for_status()?.bytes()?.to_vec()
        }
        Source::File(path) => {
            info!(path = %path.display(), "reading schedule");
            std::fs::read(&path).map_err(|e| FetchError::io(&path, e))?
        }
    };
    parse_table_csv(body.as_slice())
}

/// Parse CSV in the schedule schema. Headers are resolved through
/// [`Column::from_header`]; both date columns are required, missing settings
/// columns read as empty.
pub fn parse_table_csv<R: Read>(reader: R) -> Result<ConfigTable, FetchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    // Position of each schema column in the file, in COLUMNS order.
    let mut index: Vec<Option<usize>> = vec![None; COLUMNS.len()];
    let mut labels: Vec<String> = COLUMNS.iter().map(|c| c.name().to_string()).collect();
    for (pos, header) in headers.iter().enumerate() {
        match Column::from_header(header) {
            Some(col) => {
                let slot = col as usize;
                if index[slot].is_none() {
                    index[slot] = Some(pos);
                    labels[slot] = header.trim().trim_start_matches('\u{feff}').to_string();
                }
            }
            None => debug!(header, "ignoring unknown column"),
        }
    }
    for col in [Column::DateBegin, Column::DateEnd] {
        if index[col as usize].is_none() {
            return Err(FetchError::MissingColumn(col.name()));
        }
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row = ConfigRow::default();
        for (slot, &col) in COLUMNS.iter().enumerate() {
            let value = index[slot].and_then(|pos| record.get(pos)).unwrap_or("");
            match (col, col.kind()) {
                (Column::DateBegin, _) => row.date_begin = coerce_date(value),
                (Column::DateEnd, _) => row.date_end = coerce_date(value),
                (_, ColumnKind::Text) => row.set_text(col, value.to_string()),
                (_, ColumnKind::Date) => {}
            }
        }
        for col in COLUMNS.iter().filter(|c| !c.nullable()) {
            if matches!(row.get(*col), Cell::Date(None)) {
                debug!(row = rows.len(), column = col.name(), "missing required date, row will never match");
            }
        }
        rows.push(row);
    }

    Ok(ConfigTable::with_labels(labels, rows))
}

/// Strict `YYYY-MM-DD`; anything else (including empty) becomes None.
pub fn coerce_date(value: &str) -> Option<NaiveDate> {
    static ISO_DATE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

    let value = value.trim();
    if !ISO_DATE_RE.is_match(value) {
        if !value.is_empty() {
            debug!(value, "coercing unparseable date to empty");
        }
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
