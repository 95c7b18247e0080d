//! The port through which table passes read and write cells.
//!
//! Rows and columns are 1-based, like the spreadsheet the data lives in.
//! Reads outside a table's extent (including row 0) yield
//! [`CellValue::Empty`].

use serde::{Deserialize, Serialize};

use super::error::Result;

/// A single cell as stored by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    String(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Returns true if the cell reads as the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    /// String coercion used before any processing: numbers print in their
    /// shortest form (`5`, `6.2`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Handle to a table resolved by [`SheetHost::table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(pub usize);

/// Cell storage consumed by the table passes.
pub trait SheetHost {
    /// Resolve a table by its display name.
    fn table(&self, name: &str) -> Result<TableId>;

    /// Read the cell at (`row`, `col`).
    fn cell(&self, table: TableId, row: usize, col: usize) -> Result<CellValue>;

    /// Overwrite the cell at (`row`, `col`).
    fn set_cell(&mut self, table: TableId, row: usize, col: usize, value: &str) -> Result<()>;

    /// The last row holding any non-empty cell, or 0 for an empty table.
    fn last_row(&self, table: TableId) -> Result<usize>;

    /// Read the cell at (`row`, `col`) coerced to a string.
    fn cell_text(&self, table: TableId, row: usize, col: usize) -> Result<String> {
        Ok(self.cell(table, row, col)?.to_string())
    }
}

/// Which column holds which role. All indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    #[serde(default = "default_title_column")]
    pub title: usize,
    #[serde(default = "default_content_column")]
    pub content: usize,
    #[serde(default = "default_language_column")]
    pub language: usize,
    #[serde(default = "default_keywords_column")]
    pub keywords: usize,
}

fn default_title_column() -> usize {
    1
}

fn default_content_column() -> usize {
    2
}

fn default_language_column() -> usize {
    3
}

fn default_keywords_column() -> usize {
    4
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            title: default_title_column(),
            content: default_content_column(),
            language: default_language_column(),
            keywords: default_keywords_column(),
        }
    }
}

impl ColumnLayout {
    /// Columns with their role names, in declaration order.
    pub fn roles(&self) -> [(&'static str, usize); 4] {
        [
            ("title", self.title),
            ("content", self.content),
            ("language", self.language),
            ("keywords", self.keywords),
        ]
    }
}
