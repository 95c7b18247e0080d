//! Emoji keywords must be emoji only.
//!
//! Keyword matching treats an emoji keyword as the whole inbound message, so
//! a token like `👍foo` or `👍👍` never matches anything. Tokens that do not
//! start with an emoji are left to plain-text matching.

use crate::{
    core::{
        KeywordField,
        emoji::{canonical_token, has_text_besides_emoji},
    },
    issues::{CellLocation, EmojiWithTextIssue},
    rules::helpers::TableRows,
};

pub fn check_emoji_with_text(table: &TableRows) -> Vec<EmojiWithTextIssue> {
    let mut issues = Vec::new();

    for row in &table.rows {
        for token in KeywordField::parse_trimmed(&row.keywords).tokens() {
            let token = canonical_token(token);
            if has_text_besides_emoji(&token) {
                issues.push(EmojiWithTextIssue {
                    location: CellLocation::new(&table.table, row.row, table.layout.keywords),
                    keyword: token,
                });
            }
        }
    }

    issues
}
