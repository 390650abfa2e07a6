use crate::schema::{COLUMNS, Cell, ConfigRow, ConfigTable};

pub const TITLE: &str = "HSC FEU Configuration:";
pub const NOT_FOUND: &str = "No configuration found for the specified date.";
pub const MISSING: &str = "N/A";

/// Render a found row as a labelled block, or the not-found message.
///
/// Keys come from the table's header labels so the output mirrors the source
/// file's column names.
pub fn render_configuration(table: &ConfigTable, row: Option<&ConfigRow>) -> String {
    let Some(row) = row else {
        return NOT_FOUND.to_string();
    };

    let mut out = vec![TITLE.to_string(), "=".repeat(30)];
    for &col in COLUMNS.iter() {
        let value = match row.get(col) {
            Cell::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            Cell::Text(s) if !s.is_empty() => s.to_string(),
            Cell::Date(None) | Cell::Text(_) => MISSING.to_string(),
        };
        out.push(format!("{:<12}: {}", table.label(col), value));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::fetch::parse_table_csv;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_found_row_with_source_labels() {
        let table = parse_table_csv(
            "Date Begin,Date End,Opt Top,Opt Mid,Opt Bot,IR Top,IR Mid,IR Bot\n\
             2024-01-01,,g,r2,,z,Y,NB387\n"
                .as_bytes(),
        )
        .unwrap();
        let text = render_configuration(&table, table.rows().first());
        assert_eq!(
            text,
            "HSC FEU Configuration:\n\
             ==============================\n\
             Date Begin  : 2024-01-01\n\
             Date End    : N/A\n\
             Opt Top     : g\n\
             Opt Mid     : r2\n\
             Opt Bot     : N/A\n\
             IR Top      : z\n\
             IR Mid      : Y\n\
             IR Bot      : NB387"
        );
    }

    #[test]
    fn renders_not_found() {
        let table = ConfigTable::new(vec![]);
        assert_eq!(render_configuration(&table, None), NOT_FOUND);
    }
}
