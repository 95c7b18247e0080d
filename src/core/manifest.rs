//! Ordered list of tables to process and the runner that walks it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::SyncError;
use super::host::SheetHost;
use super::passes::{PassOptions, TableSummary, propagate_from_english, validate_only};

/// Which pass a table receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableMode {
    /// Keyword normalization and language repair only.
    ValidateOnly,
    /// Full propagation from the master table.
    #[default]
    PropagateFromEnglish,
}

impl std::fmt::Display for TableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableMode::ValidateOnly => write!(f, "validate-only"),
            TableMode::PropagateFromEnglish => write!(f, "propagate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default)]
    pub mode: TableMode,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, mode: TableMode) -> Self {
        Self {
            name: name.into(),
            mode,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Settings for a whole manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub master_table: String,
    pub pass: PassOptions,
    /// Record a missing table and move on instead of stopping the run.
    pub continue_on_missing_table: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            master_table: "English master".to_string(),
            pass: PassOptions::default(),
            continue_on_missing_table: false,
        }
    }
}

/// Result of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    Completed(TableSummary),
    /// Entry is disabled in the manifest.
    Skipped { name: String },
    /// Table does not exist and the run was allowed to continue.
    Missing { name: String },
    /// The pass aborted; later entries were not run.
    Failed { name: String, error: SyncError },
}

impl TableOutcome {
    pub fn name(&self) -> &str {
        match self {
            TableOutcome::Completed(summary) => &summary.table,
            TableOutcome::Skipped { name }
            | TableOutcome::Missing { name }
            | TableOutcome::Failed { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<TableOutcome>,
}

impl RunReport {
    pub fn completed(&self) -> impl Iterator<Item = &TableSummary> {
        self.outcomes.iter().filter_map(|o| match o {
            TableOutcome::Completed(summary) => Some(summary),
            _ => None,
        })
    }

    pub fn failure(&self) -> Option<(&str, &SyncError)> {
        self.outcomes.iter().find_map(|o| match o {
            TableOutcome::Failed { name, error } => Some((name.as_str(), error)),
            _ => None,
        })
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TableOutcome::Missing { .. }))
            .count()
    }

    pub fn changed_cells(&self) -> usize {
        self.completed().map(TableSummary::changed_cells).sum()
    }
}

/// Run every enabled entry in order.
///
/// A missing table stops the run unless
/// [`RunOptions::continue_on_missing_table`] is set; any other host failure
/// always stops it.
pub fn run_manifest<H: SheetHost + ?Sized>(
    host: &mut H,
    entries: &[ManifestEntry],
    options: &RunOptions,
) -> RunReport {
    let mut report = RunReport::default();

    for entry in entries {
        if !entry.enabled {
            report.outcomes.push(TableOutcome::Skipped {
                name: entry.name.clone(),
            });
            continue;
        }

        let result = match entry.mode {
            TableMode::ValidateOnly => validate_only(host, &entry.name, &options.pass),
            TableMode::PropagateFromEnglish => {
                propagate_from_english(host, &entry.name, &options.master_table, &options.pass)
            }
        };

        match result {
            Ok(summary) => report.outcomes.push(TableOutcome::Completed(summary)),
            Err(SyncError::TableNotFound { name })
                if options.continue_on_missing_table && name == entry.name =>
            {
                warn!(table = %name, "table not found, skipping");
                report.outcomes.push(TableOutcome::Missing { name });
            }
            Err(error) => {
                warn!(table = %entry.name, %error, "table pass aborted");
                report.outcomes.push(TableOutcome::Failed {
                    name: entry.name.clone(),
                    error,
                });
                break;
            }
        }
    }

    report
}
