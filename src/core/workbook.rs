//! In-memory workbook backed by a JSON file.
//!
//! File layout:
//!
//! ```json
//! {
//!   "sheets": {
//!     "English master": [
//!       ["Content title", "Content", "Language", "Automation"],
//!       ["eng_welcome", "Hello", "eng", "hi, hello"]
//!     ]
//!   }
//! }
//! ```
//!
//! The first array of a sheet is row 1. Cells are strings, numbers, booleans
//! or `null`. Sheet order is preserved on save.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Number, Value};

use super::error::{Result as SyncResult, SyncError};
use super::host::{CellValue, SheetHost, TableId};

/// A named grid of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell at 1-based (`row`, `col`); `None` outside the stored grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        let row_cells = self.rows.get(row.checked_sub(1)?)?;
        row_cells.get(col.checked_sub(1)?)
    }

    /// Cell at 1-based (`row`, `col`) coerced to a string.
    pub fn text(&self, row: usize, col: usize) -> String {
        self.get(row, col).map(ToString::to_string).unwrap_or_default()
    }

    fn last_row(&self) -> usize {
        self.rows
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map_or(0, |idx| idx + 1)
    }

    fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let row_cells = &mut self.rows[row - 1];
        if row_cells.len() < col {
            row_cells.resize(col, CellValue::Empty);
        }
        row_cells[col - 1] = value;
    }
}

/// Build rows of string cells, mostly for fixtures.
///
/// Empty strings become [`CellValue::Empty`].
pub fn text_rows(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::from(*cell)
                    }
                })
                .collect()
        })
        .collect()
}

/// An ordered collection of sheets implementing [`SheetHost`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, replacing any existing sheet with the same name.
    pub fn add_sheet(&mut self, name: impl Into<String>, rows: Vec<Vec<CellValue>>) {
        let sheet = Sheet::new(name, rows);
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    /// Builder form of [`Workbook::add_sheet`].
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        self.add_sheet(name, rows);
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    /// Load a workbook from a JSON file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read workbook: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse workbook: {}", path.display()))
    }

    /// Save the workbook with 2-space indentation and a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, format!("{}\n", self.to_json_string()?))
            .with_context(|| format!("Failed to write workbook: {}", path.display()))?;

        Ok(())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Invalid JSON")?;
        let Value::Object(mut root) = value else {
            bail!("Root of workbook must be an object");
        };
        let sheets = match root.remove("sheets") {
            Some(Value::Object(sheets)) => sheets,
            Some(_) => bail!("\"sheets\" must be an object of sheet name to rows"),
            None => bail!("Workbook has no \"sheets\" object"),
        };

        let mut workbook = Workbook::new();
        for (name, rows) in sheets {
            let Value::Array(rows) = rows else {
                bail!("Sheet \"{}\" must be an array of rows", name);
            };
            let rows = rows
                .into_iter()
                .enumerate()
                .map(|(idx, row)| {
                    parse_row(row).with_context(|| format!("Sheet \"{}\", row {}", name, idx + 1))
                })
                .collect::<Result<Vec<_>>>()?;
            workbook.add_sheet(name, rows);
        }
        Ok(workbook)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut sheets = Map::new();
        for sheet in &self.sheets {
            let rows = sheet
                .rows
                .iter()
                .map(|row| Value::Array(row.iter().map(cell_to_json).collect()))
                .collect();
            sheets.insert(sheet.name.clone(), Value::Array(rows));
        }
        let mut root = Map::new();
        root.insert("sheets".to_string(), Value::Object(sheets));
        serde_json::to_string_pretty(&Value::Object(root)).context("Failed to serialize workbook")
    }

    fn sheet_at(&self, table: TableId) -> SyncResult<&Sheet> {
        self.sheets
            .get(table.0)
            .ok_or_else(|| SyncError::host(format!("stale table handle {}", table.0)))
    }
}

fn parse_row(row: Value) -> Result<Vec<CellValue>> {
    let Value::Array(cells) = row else {
        bail!("row must be an array of cells");
    };
    cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Value::Null => Ok(CellValue::Empty),
            Value::String(s) => Ok(CellValue::String(s)),
            Value::Bool(b) => Ok(CellValue::Bool(b)),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .with_context(|| format!("column {}: number out of range", idx + 1)),
            Value::Array(_) | Value::Object(_) => {
                bail!("column {}: cell must be a string, number, boolean or null", idx + 1)
            }
        })
        .collect()
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::String(s) => Value::String(s.clone()),
        CellValue::Bool(b) => Value::Bool(*b),
        // Integral values are written back without a trailing ".0".
        CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            Value::from(*n as i64)
        }
        CellValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
    }
}

impl SheetHost for Workbook {
    fn table(&self, name: &str) -> SyncResult<TableId> {
        self.sheets
            .iter()
            .position(|s| s.name == name)
            .map(TableId)
            .ok_or_else(|| SyncError::table_not_found(name))
    }

    fn cell(&self, table: TableId, row: usize, col: usize) -> SyncResult<CellValue> {
        Ok(self.sheet_at(table)?.get(row, col).cloned().unwrap_or_default())
    }

    fn set_cell(&mut self, table: TableId, row: usize, col: usize, value: &str) -> SyncResult<()> {
        if row == 0 || col == 0 {
            return Err(SyncError::host(format!(
                "cannot write cell ({}, {}): rows and columns start at 1",
                row, col
            )));
        }
        let sheet = self
            .sheets
            .get_mut(table.0)
            .ok_or_else(|| SyncError::host(format!("stale table handle {}", table.0)))?;
        let value = if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::from(value)
        };
        sheet.set(row, col, value);
        Ok(())
    }

    fn last_row(&self, table: TableId) -> SyncResult<usize> {
        Ok(self.sheet_at(table)?.last_row())
    }
}
