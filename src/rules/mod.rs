//! Workbook check rules.
//!
//! Each rule is a pure function over a [`TableRows`] snapshot and returns its
//! own issue type. [`run_checks`] reads the snapshots through a
//! [`SheetHost`] and collects everything into [`Issue`]s.
//!
//! ## Module Structure
//!
//! - `helpers`: Row snapshots shared by the rules
//! - `content_length`: Content longer than the platform limit
//! - `emoji_with_text`: Emoji keywords mixed with text
//! - `duplicate_keyword`: Keywords reused across rows of a table
//! - `missing_language`: Blank language on the first data row
//! - `title_format`: Content titles that are not normalized
//! - `title_mismatch`: Translated titles missing from the master

pub mod content_length;
pub mod duplicate_keyword;
pub mod emoji_with_text;
pub mod helpers;
pub mod missing_language;
pub mod title_format;
pub mod title_mismatch;

use clap::ValueEnum;

use crate::{
    config::DEFAULT_MASTER_TABLE,
    core::{ColumnLayout, Result, SheetHost, TableMode},
    issues::Issue,
};

pub use helpers::{TableRow, TableRows, read_table_rows};

use content_length::check_content_length;
use duplicate_keyword::check_duplicate_keywords;
use emoji_with_text::check_emoji_with_text;
use missing_language::check_missing_language;
use title_format::check_title_format;
use title_mismatch::check_title_mismatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    ContentTooLong,
    EmojiWithText,
    DuplicateKeyword,
    MissingLanguage,
    TitleFormat,
    TitleMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::ContentTooLong,
            CheckRule::EmojiWithText,
            CheckRule::DuplicateKeyword,
            CheckRule::MissingLanguage,
            CheckRule::TitleFormat,
            CheckRule::TitleMismatch,
        ]
    }
}

/// A table to check and the pass it receives during sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedTable {
    pub name: String,
    pub mode: TableMode,
}

impl CheckedTable {
    pub fn new(name: impl Into<String>, mode: TableMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }
}

/// Settings the rules read beyond the rows themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub layout: ColumnLayout,
    /// Table that propagated tables are compared against.
    pub master_table: String,
    pub max_content_length: usize,
    pub duplicate_keyword_exemptions: Vec<String>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            master_table: DEFAULT_MASTER_TABLE.to_string(),
            max_content_length: content_length::DEFAULT_MAX_CONTENT_LENGTH,
            duplicate_keyword_exemptions: vec!["myths".to_string()],
        }
    }
}

/// Outcome of checking a set of tables.
#[derive(Debug, Default)]
pub struct CheckOutput {
    pub issues: Vec<Issue>,
    pub tables_checked: usize,
    pub rows_checked: usize,
}

/// Run `rules` over every table in `tables`, in order.
///
/// `title-mismatch` only applies to tables in propagate mode and reads the
/// master table once. Read-only; fails on the first table the host cannot
/// resolve.
pub fn run_checks<H: SheetHost + ?Sized>(
    host: &H,
    tables: &[CheckedTable],
    rules: &[CheckRule],
    settings: &CheckSettings,
) -> Result<CheckOutput> {
    let mut output = CheckOutput::default();

    let master = if rules.contains(&CheckRule::TitleMismatch)
        && tables
            .iter()
            .any(|t| t.mode == TableMode::PropagateFromEnglish)
    {
        Some(read_table_rows(host, &settings.master_table, &settings.layout)?)
    } else {
        None
    };

    for checked in tables {
        let table = read_table_rows(host, &checked.name, &settings.layout)?;

        for rule in rules {
            match rule {
                CheckRule::ContentTooLong => {
                    let issues = check_content_length(&table, settings.max_content_length);
                    output.issues.extend(issues.into_iter().map(Issue::ContentTooLong));
                }
                CheckRule::EmojiWithText => {
                    let issues = check_emoji_with_text(&table);
                    output.issues.extend(issues.into_iter().map(Issue::EmojiWithText));
                }
                CheckRule::DuplicateKeyword => {
                    let issues =
                        check_duplicate_keywords(&table, &settings.duplicate_keyword_exemptions);
                    output.issues.extend(issues.into_iter().map(Issue::DuplicateKeyword));
                }
                CheckRule::MissingLanguage => {
                    let issues = check_missing_language(&table);
                    output.issues.extend(issues.into_iter().map(Issue::MissingLanguage));
                }
                CheckRule::TitleFormat => {
                    let issues = check_title_format(&table);
                    output.issues.extend(issues.into_iter().map(Issue::TitleFormat));
                }
                CheckRule::TitleMismatch => {
                    if let Some(master) = master
                        .as_ref()
                        .filter(|_| checked.mode == TableMode::PropagateFromEnglish)
                    {
                        let issues = check_title_mismatch(&table, master);
                        output.issues.extend(issues.into_iter().map(Issue::TitleMismatch));
                    }
                }
            }
        }

        output.tables_checked += 1;
        output.rows_checked += table.rows.len();
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        SyncError,
        workbook::{Workbook, text_rows},
    };
    use crate::issues::{Report, Rule};
    use pretty_assertions::assert_eq;

    const HEADER: &[&str] = &["Content title", "Content", "Language", "Automation"];

    fn workbook() -> Workbook {
        Workbook::new()
            .with_sheet(
                "English master",
                text_rows(&[
                    HEADER,
                    &["eng_welcome", "Hello", "eng", "hi, hello"],
                    &["eng_menu", "Menu", "", "menu, hi"],
                ]),
            )
            .with_sheet(
                "Twi (Ghana)",
                text_rows(&[HEADER, &["welcome", "Akwaaba", "", "👍foo"]]),
            )
    }

    fn tables() -> Vec<CheckedTable> {
        vec![
            CheckedTable::new("English master", TableMode::ValidateOnly),
            CheckedTable::new("Twi (Ghana)", TableMode::PropagateFromEnglish),
        ]
    }

    #[test]
    fn test_run_all_rules() {
        let output = run_checks(
            &workbook(),
            &tables(),
            &CheckRule::all(),
            &CheckSettings::default(),
        )
        .unwrap();

        let rules: Vec<_> = output
            .issues
            .iter()
            .map(|i| (i.location().table.as_str(), i.report_rule()))
            .collect();
        assert_eq!(
            rules,
            vec![
                ("English master", Rule::DuplicateKeyword),
                ("Twi (Ghana)", Rule::EmojiWithText),
                ("Twi (Ghana)", Rule::MissingLanguage),
            ]
        );
        assert_eq!(output.tables_checked, 2);
        assert_eq!(output.rows_checked, 3);
    }

    #[test]
    fn test_run_selected_rules() {
        let output = run_checks(
            &workbook(),
            &tables(),
            &[CheckRule::MissingLanguage],
            &CheckSettings::default(),
        )
        .unwrap();
        assert_eq!(output.issues.len(), 1);
    }

    #[test]
    fn test_missing_table() {
        let err = run_checks(
            &workbook(),
            &[CheckedTable::new("Klingon", TableMode::PropagateFromEnglish)],
            &CheckRule::all(),
            &CheckSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, SyncError::table_not_found("Klingon"));
    }

    #[test]
    fn test_title_mismatch_only_for_propagated_tables() {
        let workbook = workbook().with_sheet(
            "Sepedi (SA)",
            text_rows(&[HEADER, &["nso_news", "Ditaba", "nso", "news"]]),
        );
        let rules = [CheckRule::TitleFormat, CheckRule::TitleMismatch];

        let mut tables = tables();
        tables.push(CheckedTable::new("Sepedi (SA)", TableMode::ValidateOnly));
        let output = run_checks(&workbook, &tables, &rules, &CheckSettings::default()).unwrap();
        assert!(output.issues.is_empty());

        tables[2].mode = TableMode::PropagateFromEnglish;
        let output = run_checks(&workbook, &tables, &rules, &CheckSettings::default()).unwrap();
        let found: Vec<_> = output
            .issues
            .iter()
            .map(|i| (i.location().to_string(), i.message()))
            .collect();
        assert_eq!(
            found,
            vec![(
                "Sepedi (SA):2:1".to_string(),
                "Missing english content news".to_string()
            )]
        );
    }

    #[test]
    fn test_title_mismatch_needs_master() {
        let settings = CheckSettings {
            master_table: "Master".to_string(),
            ..CheckSettings::default()
        };
        let err = run_checks(&workbook(), &tables(), &[CheckRule::TitleMismatch], &settings)
            .unwrap_err();
        assert_eq!(err, SyncError::table_not_found("Master"));
    }
}
