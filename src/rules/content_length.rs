//! Content length rule.
//!
//! Flags content cells longer than the messaging platform accepts.

use crate::{
    issues::{CellLocation, ContentTooLongIssue},
    rules::helpers::TableRows,
};

/// Default maximum content length in characters.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 4096;

pub fn check_content_length(table: &TableRows, limit: usize) -> Vec<ContentTooLongIssue> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            let length = row.content.chars().count();
            (length > limit).then(|| ContentTooLongIssue {
                location: CellLocation::new(&table.table, row.row, table.layout.content),
                title: row.title.clone(),
                length,
                limit,
            })
        })
        .collect()
}
