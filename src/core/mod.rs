//! Sync engine: emoji normalization, keyword reconciliation and the table
//! passes that apply them through a [`SheetHost`].
//!
//! - `emoji`: emoji classification and skin-tone stripping
//! - `keywords`: keyword field parsing, normalization and reconciliation
//! - `host`: the cell storage port and cell values
//! - `workbook`: JSON-file workbook implementing the port
//! - `passes`: validate-only and propagate-from-English table passes
//! - `manifest`: ordered table list and the runner

pub mod emoji;
pub mod error;
pub mod host;
pub mod keywords;
pub mod manifest;
pub mod passes;
pub mod workbook;

pub use error::{Result, SyncError};
pub use host::{CellValue, ColumnLayout, SheetHost, TableId};
pub use keywords::{KeywordField, SeparatorPolicy};
pub use manifest::{ManifestEntry, RunOptions, RunReport, TableMode, TableOutcome, run_manifest};
pub use passes::{PassOptions, TableSummary, propagate_from_english, validate_only};
pub use workbook::{Sheet, Workbook};
