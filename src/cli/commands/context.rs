use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use glob::Pattern;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{ManifestEntry, TableMode, Workbook},
    rules::CheckedTable,
};

/// Resolved configuration and workbook location for one command.
pub struct CommandContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    /// Absolute path of the workbook file.
    pub workbook_path: PathBuf,
    /// Workbook path as given by the user, for messages.
    pub workbook_label: String,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, common)
    }

    /// Load config starting from `dir`. `--workbook` is relative to `dir`;
    /// the config's `workbook` is relative to the config file.
    pub fn from_dir(dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;
        let base_dir = loaded.base_dir(dir);
        let config_path = loaded.path;
        let mut config = loaded.config;

        if let Some(master) = &common.master_table {
            config.master_table = master.clone();
            config
                .validate()
                .context("Invalid --master-table for this configuration")?;
        }

        let (workbook_path, workbook_label) = match &common.workbook {
            Some(path) => (dir.join(path), path.display().to_string()),
            None => (base_dir.join(&config.workbook), config.workbook.clone()),
        };

        Ok(Self {
            config,
            config_path,
            workbook_path,
            workbook_label,
        })
    }

    pub fn open_workbook(&self) -> Result<Workbook> {
        Workbook::open(&self.workbook_path)
    }

    /// Manifest entries, optionally restricted to names matching `only`.
    pub fn manifest(&self, only: Option<&Pattern>) -> Vec<ManifestEntry> {
        self.config
            .tables
            .iter()
            .filter(|entry| only.is_none_or(|pattern| pattern.matches(&entry.name)))
            .cloned()
            .collect()
    }

    /// Tables to check: the master first, then every enabled manifest table.
    pub fn checked_tables(&self) -> Vec<CheckedTable> {
        let mut tables = vec![CheckedTable::new(
            self.config.master_table.clone(),
            TableMode::ValidateOnly,
        )];
        for entry in self.config.tables.iter().filter(|e| e.enabled) {
            if !tables.iter().any(|t| t.name == entry.name) {
                tables.push(CheckedTable::new(entry.name.clone(), entry.mode));
            }
        }
        tables
    }
}

/// Parse the `--only` glob.
pub fn parse_only(only: Option<&str>) -> Result<Option<Pattern>> {
    only.map(|pattern| {
        Pattern::new(pattern)
            .with_context(|| format!("Invalid glob pattern in '--only': \"{}\"", pattern))
    })
    .transpose()
}
