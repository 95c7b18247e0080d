//! Row-by-row table passes.
//!
//! - [`validate_only`]: normalize keyword emoji and repair blank language
//!   cells. Used for the master and for tables without an English upstream.
//! - [`propagate_from_english`]: everything `validate_only` does, plus fill
//!   blank content from the master and append missing master keywords.
//!
//! Both passes visit rows `1..=last_row`, header row included, and abort on
//! the first host failure. Cells written before the failure stay written.

use tracing::{debug, info};

use super::error::Result;
use super::host::{ColumnLayout, SheetHost, TableId};
use super::keywords::SeparatorPolicy;
use super::manifest::TableMode;

/// Settings shared by both passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOptions {
    pub layout: ColumnLayout,
    pub separator_policy: SeparatorPolicy,
}

/// What a single table pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub table: String,
    pub mode: TableMode,
    pub rows_visited: usize,
    /// Keyword fields whose text changed during emoji normalization.
    pub keywords_normalized: usize,
    /// Blank content cells filled from the master.
    pub content_filled: usize,
    /// Keyword fields extended with master keywords.
    pub keywords_extended: usize,
    /// Blank language cells filled from the row above.
    pub languages_repaired: usize,
}

impl TableSummary {
    fn new(table: &str, mode: TableMode) -> Self {
        Self {
            table: table.to_string(),
            mode,
            ..Default::default()
        }
    }

    /// Number of cells whose value changed.
    pub fn changed_cells(&self) -> usize {
        self.keywords_normalized
            + self.content_filled
            + self.keywords_extended
            + self.languages_repaired
    }
}

/// Normalize keywords and repair language cells of `table_name`.
pub fn validate_only<H: SheetHost + ?Sized>(
    host: &mut H,
    table_name: &str,
    options: &PassOptions,
) -> Result<TableSummary> {
    let table = host.table(table_name)?;
    let last_row = host.last_row(table)?;
    let layout = &options.layout;
    let mut summary = TableSummary::new(table_name, TableMode::ValidateOnly);
    info!(table = table_name, last_row, "validating table");

    for row in 1..=last_row {
        let language_blank = host.cell(table, row, layout.language)?.is_empty();

        if normalize_row_keywords(host, table, row, options)? {
            summary.keywords_normalized += 1;
        }
        if language_blank && repair_language(host, table, row, layout)? {
            summary.languages_repaired += 1;
        }
        summary.rows_visited += 1;
    }

    Ok(summary)
}

/// Fill `table_name` from the master table `master_name`.
///
/// Content is copied only into blank cells; keywords are reconciled on every
/// row. The master is read row-for-row and is never written.
pub fn propagate_from_english<H: SheetHost + ?Sized>(
    host: &mut H,
    table_name: &str,
    master_name: &str,
    options: &PassOptions,
) -> Result<TableSummary> {
    let table = host.table(table_name)?;
    let master = host.table(master_name)?;
    let last_row = host.last_row(table)?;
    let layout = &options.layout;
    let mut summary = TableSummary::new(table_name, TableMode::PropagateFromEnglish);
    info!(
        table = table_name,
        master = master_name,
        last_row,
        "propagating from master"
    );

    for row in 1..=last_row {
        let content_blank = host.cell(table, row, layout.content)?.is_empty();
        let language_blank = host.cell(table, row, layout.language)?.is_empty();

        if normalize_row_keywords(host, table, row, options)? {
            summary.keywords_normalized += 1;
        }

        if content_blank {
            let english_content = host.cell_text(master, row, layout.content)?;
            if !english_content.is_empty() {
                host.set_cell(table, row, layout.content, &english_content)?;
                debug!(table = table_name, row, "filled content from master");
                summary.content_filled += 1;
            }
        }

        let keywords = host.cell_text(table, row, layout.keywords)?;
        let english_keywords = host.cell_text(master, row, layout.keywords)?;
        let reconciled = options
            .separator_policy
            .reconcile(&keywords, &english_keywords);
        if reconciled != keywords {
            debug!(table = table_name, row, keywords = %reconciled, "appended master keywords");
            host.set_cell(table, row, layout.keywords, &reconciled)?;
            summary.keywords_extended += 1;
        }

        if language_blank && repair_language(host, table, row, layout)? {
            summary.languages_repaired += 1;
        }
        summary.rows_visited += 1;
    }

    Ok(summary)
}

/// Rewrite the keyword cell with its emoji normalized. The cell is only
/// written, and true returned, when the text changes, so numeric cells and
/// short rows are left as they are.
fn normalize_row_keywords<H: SheetHost + ?Sized>(
    host: &mut H,
    table: TableId,
    row: usize,
    options: &PassOptions,
) -> Result<bool> {
    let col = options.layout.keywords;
    let raw = host.cell_text(table, row, col)?;
    let normalized = options.separator_policy.normalize_field(&raw);
    if normalized == raw {
        return Ok(false);
    }
    host.set_cell(table, row, col, &normalized)?;
    debug!(row, keywords = %normalized, "normalized keyword emoji");
    Ok(true)
}

/// Copy the language of row `row - 1` into the blank language cell of `row`.
/// Row 1 reads row 0, which is always empty. Returns true if a non-empty
/// value was written; an empty value leaves the blank cell untouched.
fn repair_language<H: SheetHost + ?Sized>(
    host: &mut H,
    table: TableId,
    row: usize,
    layout: &ColumnLayout,
) -> Result<bool> {
    let previous = host.cell_text(table, row - 1, layout.language)?;
    if previous.is_empty() {
        return Ok(false);
    }
    host.set_cell(table, row, layout.language, &previous)?;
    debug!(row, language = %previous, "repaired blank language");
    Ok(true)
}
