//! Duplicate keyword detection rule.
//!
//! A keyword may trigger only one row per table. Duplicates inside a single
//! row are ignored; rows whose title contains one of the exemptions (for
//! example `myths`, which shares keywords on purpose) are skipped.

use std::collections::HashMap;

use crate::{
    core::{KeywordField, emoji::canonical_token},
    issues::{CellLocation, DuplicateKeywordIssue},
    rules::helpers::TableRows,
};

pub fn check_duplicate_keywords(
    table: &TableRows,
    exemptions: &[String],
) -> Vec<DuplicateKeywordIssue> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut issues = Vec::new();

    for row in &table.rows {
        let mut row_keywords: Vec<String> = Vec::new();
        for token in KeywordField::parse_trimmed(&row.keywords).tokens() {
            let token = canonical_token(token);
            if !row_keywords.contains(&token) {
                row_keywords.push(token);
            }
        }

        if exemptions.iter().any(|e| row.title.contains(e.as_str())) {
            continue;
        }

        for keyword in row_keywords {
            match first_seen.get(&keyword) {
                Some(&first_row) => issues.push(DuplicateKeywordIssue {
                    location: CellLocation::new(&table.table, row.row, table.layout.keywords),
                    keyword,
                    first_row,
                }),
                None => {
                    first_seen.insert(keyword, row.row);
                }
            }
        }
    }

    issues
}
