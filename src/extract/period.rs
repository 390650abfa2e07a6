//! Period cells from the markdown table.
//!
//! Example cells:
//!   02/01/14&ndash;11/30/19
//!   1/6/24 – 3/5/24
//!   12/01/23&ndash;            (still in effect)

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// A parsed period. Either side is None when absent or unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// True when the cell had no end text at all.
    pub open_ended: bool,
}

impl Period {
    /// Both sides as `YYYY-MM-DD`, empty when missing.
    pub fn to_iso(&self) -> (String, String) {
        (iso_or_empty(self.start), iso_or_empty(self.end))
    }
}

fn iso_or_empty(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn is_dash(c: char) -> bool {
    matches!(c, '\u{2013}' | '\u{2014}' | '-')
}

/// Parse a period cell into start and end dates.
///
/// The first dash-like character (en-dash, em-dash, hyphen, or their HTML
/// entities) separates the two sides. A trailing dash, or no dash at all,
/// leaves the period open-ended.
pub fn parse_period(text: &str) -> Period {
    let cleaned = text
        .replace("&ndash;", "\u{2013}")
        .replace("&mdash;", "\u{2014}");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Period {
            open_ended: true,
            ..Period::default()
        };
    }

    if cleaned.ends_with(is_dash) {
        let start = cleaned.trim_end_matches(is_dash).trim();
        return Period {
            start: parse_short_date(start),
            end: None,
            open_ended: true,
        };
    }

    match cleaned.split_once(is_dash) {
        Some((left, right)) => {
            let right = right.trim();
            Period {
                start: parse_short_date(left.trim()),
                end: parse_short_date(right),
                open_ended: right.is_empty(),
            }
        }
        None => Period {
            start: parse_short_date(cleaned),
            end: None,
            open_ended: true,
        },
    }
}

/// Parse `m/d/yy` (zero padding optional). The pattern is matched as a
/// prefix, so trailing text after the year is ignored.
pub fn parse_short_date(text: &str) -> Option<NaiveDate> {
    static SHORT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})").expect("valid regex")
    });

    let caps = SHORT_DATE_RE.captures(text.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let yy: u32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(expand_year(yy), month, day)
}

/// Two-digit years: 00-50 are 2000-2050, 51-99 are 1951-1999.
pub fn expand_year(yy: u32) -> i32 {
    let yy = (yy % 100) as i32;
    if yy <= 50 { 2000 + yy } else { 1900 + yy }
}
