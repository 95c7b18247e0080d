//! Row snapshots shared by the check rules.

use crate::core::{ColumnLayout, Result, SheetHost};

/// First row holding data; row 1 is the header.
pub const FIRST_DATA_ROW: usize = 2;

/// The four role columns of one row, coerced to strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub row: usize,
    pub title: String,
    pub content: String,
    pub language: String,
    pub keywords: String,
}

/// Data rows of one table, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRows {
    pub table: String,
    pub layout: ColumnLayout,
    pub rows: Vec<TableRow>,
}

/// Read rows `FIRST_DATA_ROW..=last_row` of `table_name` through the host.
pub fn read_table_rows<H: SheetHost + ?Sized>(
    host: &H,
    table_name: &str,
    layout: &ColumnLayout,
) -> Result<TableRows> {
    let table = host.table(table_name)?;
    let last_row = host.last_row(table)?;
    let rows = (FIRST_DATA_ROW..=last_row)
        .map(|row| {
            Ok(TableRow {
                row,
                title: host.cell_text(table, row, layout.title)?,
                content: host.cell_text(table, row, layout.content)?,
                language: host.cell_text(table, row, layout.language)?,
                keywords: host.cell_text(table, row, layout.keywords)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TableRows {
        table: table_name.to_string(),
        layout: *layout,
        rows,
    })
}

/// The title with its language prefix and the following separator removed.
///
/// `eng_welcome` in an `eng` row becomes `welcome`. Titles that do not start
/// with the language are returned trimmed but otherwise unchanged.
pub fn base_title<'a>(title: &'a str, language: &str) -> &'a str {
    let title = title.trim();
    if language.is_empty() {
        return title;
    }
    match title.strip_prefix(language) {
        Some(rest) => {
            let mut chars = rest.chars();
            chars.next();
            chars.as_str()
        }
        None => title,
    }
}
