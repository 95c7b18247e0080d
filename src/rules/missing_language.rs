//! Missing language on the first data row.
//!
//! Language repair copies from the row above. On the first data row that is
//! the header, so a blank there ends up as the header text.

use crate::{
    issues::{CellLocation, MissingLanguageIssue},
    rules::helpers::{FIRST_DATA_ROW, TableRows},
};

pub fn check_missing_language(table: &TableRows) -> Vec<MissingLanguageIssue> {
    table
        .rows
        .iter()
        .find(|row| row.row == FIRST_DATA_ROW)
        .filter(|row| row.language.is_empty())
        .map(|row| MissingLanguageIssue {
            location: CellLocation::new(&table.table, row.row, table.layout.language),
        })
        .into_iter()
        .collect()
}
