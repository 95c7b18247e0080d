//! Translated rows must name content that exists in the master.
//!
//! Titles are compared without their language prefix, so `twi_welcome` in a
//! `twi` row matches `eng_welcome` in an `eng` master row. A blank language
//! cell takes the language of the row above, the way language repair would
//! fill it.

use std::collections::HashSet;

use crate::{
    issues::{CellLocation, TitleMismatchIssue},
    rules::helpers::{TableRow, TableRows, base_title},
};

/// Pairs each titled row with its base title.
fn base_titles(table: &TableRows) -> Vec<(&TableRow, &str)> {
    let mut language = "";
    let mut titles = Vec::new();
    for row in &table.rows {
        if !row.language.is_empty() {
            language = row.language.as_str();
        }
        if !row.title.trim().is_empty() {
            titles.push((row, base_title(&row.title, language)));
        }
    }
    titles
}

pub fn check_title_mismatch(table: &TableRows, master: &TableRows) -> Vec<TitleMismatchIssue> {
    let master_titles: HashSet<&str> = base_titles(master)
        .into_iter()
        .map(|(_, title)| title)
        .collect();

    base_titles(table)
        .into_iter()
        .filter(|(_, title)| !master_titles.contains(title))
        .map(|(row, title)| TitleMismatchIssue {
            location: CellLocation::new(&table.table, row.row, table.layout.title),
            title: title.to_string(),
            master_title: master
                .rows
                .iter()
                .find(|m| m.row == row.row && !m.title.trim().is_empty())
                .map(|m| m.title.trim().to_string()),
        })
        .collect()
}
