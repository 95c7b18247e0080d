//! Content titles must be normalized.
//!
//! A normalized title has no surrounding whitespace and every run of
//! non-word characters replaced by a single `_`.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    issues::{CellLocation, TitleFormatIssue},
    rules::helpers::TableRows,
};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// The normalized form of `title`.
///
/// ```
/// use sheetsync::rules::title_format::clean_title;
///
/// assert_eq!(clean_title("  eng myths - 1 "), "eng_myths_1");
/// assert_eq!(clean_title("twi_welcome"), "twi_welcome");
/// ```
pub fn clean_title(title: &str) -> String {
    NON_WORD.replace_all(title.trim(), "_").into_owned()
}

pub fn check_title_format(table: &TableRows) -> Vec<TitleFormatIssue> {
    table
        .rows
        .iter()
        .filter(|row| !row.title.is_empty())
        .filter_map(|row| {
            let cleaned = clean_title(&row.title);
            (cleaned != row.title).then(|| TitleFormatIssue {
                location: CellLocation::new(&table.table, row.row, table.layout.title),
                title: row.title.clone(),
                cleaned,
            })
        })
        .collect()
}
