//! Issue types produced by the workbook checks.
//!
//! Each issue carries its table location plus whatever the reporter needs
//! to explain it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ContentTooLong,
    EmojiWithText,
    DuplicateKeyword,
    MissingLanguage,
    TitleFormat,
    TitleMismatch,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ContentTooLong => write!(f, "content-too-long"),
            Rule::EmojiWithText => write!(f, "emoji-with-text"),
            Rule::DuplicateKeyword => write!(f, "duplicate-keyword"),
            Rule::MissingLanguage => write!(f, "missing-language"),
            Rule::TitleFormat => write!(f, "title-format"),
            Rule::TitleMismatch => write!(f, "title-mismatch"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// A cell in a named table (1-based row and column).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellLocation {
    pub table: String,
    pub row: usize,
    pub col: usize,
}

impl CellLocation {
    pub fn new(table: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            table: table.into(),
            row,
            col,
        }
    }
}

impl std::fmt::Display for CellLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.table, self.row, self.col)
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Content longer than the messaging platform accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTooLongIssue {
    pub location: CellLocation,
    pub title: String,
    /// Length in characters.
    pub length: usize,
    pub limit: usize,
}

/// Keyword token that mixes an emoji with other text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiWithTextIssue {
    pub location: CellLocation,
    pub keyword: String,
}

/// Keyword already used by an earlier row of the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeywordIssue {
    pub location: CellLocation,
    pub keyword: String,
    pub first_row: usize,
}

/// First data row has no language, so repair has nothing to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLanguageIssue {
    pub location: CellLocation,
}

/// Content title with surrounding whitespace or non-word characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormatIssue {
    pub location: CellLocation,
    pub title: String,
    pub cleaned: String,
}

/// Translated row whose title has no counterpart in the master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMismatchIssue {
    pub location: CellLocation,
    /// Title without its language prefix.
    pub title: String,
    /// Title of the master row with the same row number, if any.
    pub master_title: Option<String>,
}

// ============================================================
// Unified Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ContentTooLong(ContentTooLongIssue),
    EmojiWithText(EmojiWithTextIssue),
    DuplicateKeyword(DuplicateKeywordIssue),
    MissingLanguage(MissingLanguageIssue),
    TitleFormat(TitleFormatIssue),
    TitleMismatch(TitleMismatchIssue),
}

/// Common interface for displaying issues. Uses `enum_dispatch` for
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> &CellLocation;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for ContentTooLongIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Content too long: {}", self.title)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ContentTooLong
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} characters, limit is {}",
            self.length, self.limit
        ))
    }
}

impl Report for EmojiWithTextIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Invalid keyword, more than just emoji: {}", self.keyword)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::EmojiWithText
    }

    fn hint(&self) -> Option<&str> {
        Some("split the emoji and the text into separate keywords")
    }
}

impl Report for DuplicateKeywordIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Duplicate keyword {}", self.keyword)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateKeyword
    }

    fn details(&self) -> Option<String> {
        Some(format!("first used in row {}", self.first_row))
    }
}

impl Report for MissingLanguageIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        "Missing language on first content row".to_string()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingLanguage
    }

    fn hint(&self) -> Option<&str> {
        Some("blank language cells are filled from the row above, which is the header here")
    }
}

impl Report for TitleFormatIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Content title is not normalized: {}", self.title)
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::TitleFormat
    }

    fn details(&self) -> Option<String> {
        Some(format!("expected {}", self.cleaned))
    }
}

impl Report for TitleMismatchIssue {
    fn location(&self) -> &CellLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Missing english content {}", self.title)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::TitleMismatch
    }

    fn details(&self) -> Option<String> {
        Some(match &self.master_title {
            Some(title) => format!("master row {} is {}", self.location.row, title),
            None => format!("master has no row {}", self.location.row),
        })
    }
}
