use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    ColumnLayout, ManifestEntry, PassOptions, RunOptions, SeparatorPolicy, TableMode,
};

pub const CONFIG_FILE_NAME: &str = ".sheetsyncrc.json";

pub const DEFAULT_MASTER_TABLE: &str = "English master";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_workbook")]
    pub workbook: String,
    #[serde(default = "default_master_table")]
    pub master_table: String,
    #[serde(default)]
    pub columns: ColumnLayout,
    #[serde(default)]
    pub separator_policy: SeparatorPolicy,
    #[serde(default)]
    pub continue_on_missing_table: bool,
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,
    #[serde(default = "default_duplicate_keyword_exemptions")]
    pub duplicate_keyword_exemptions: Vec<String>,
    #[serde(default = "default_tables")]
    pub tables: Vec<ManifestEntry>,
}

fn default_workbook() -> String {
    "./workbook.json".to_string()
}

fn default_master_table() -> String {
    DEFAULT_MASTER_TABLE.to_string()
}

fn default_max_content_length() -> usize {
    4096
}

fn default_duplicate_keyword_exemptions() -> Vec<String> {
    vec!["myths".to_string()]
}

fn default_tables() -> Vec<ManifestEntry> {
    vec![ManifestEntry::new(
        DEFAULT_MASTER_TABLE,
        TableMode::ValidateOnly,
    )]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            master_table: default_master_table(),
            columns: ColumnLayout::default(),
            separator_policy: SeparatorPolicy::default(),
            continue_on_missing_table: false,
            max_content_length: default_max_content_length(),
            duplicate_keyword_exemptions: default_duplicate_keyword_exemptions(),
            tables: default_tables(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Column indices must be 1-based and distinct, table names unique, and
    /// the master table must not be fed from itself.
    pub fn validate(&self) -> Result<()> {
        if self.master_table.trim().is_empty() {
            bail!("'masterTable' must not be empty");
        }

        let mut seen_columns = HashSet::new();
        for (role, col) in self.columns.roles() {
            if col == 0 {
                bail!("Column '{}' must be 1 or greater (columns are 1-based)", role);
            }
            if !seen_columns.insert(col) {
                bail!("Column {} is assigned to more than one role in 'columns'", col);
            }
        }

        let mut seen_tables = HashSet::new();
        for entry in &self.tables {
            if entry.name.trim().is_empty() {
                bail!("Table names in 'tables' must not be empty");
            }
            if !seen_tables.insert(entry.name.as_str()) {
                bail!("Table \"{}\" is listed more than once in 'tables'", entry.name);
            }
            if entry.name == self.master_table && entry.mode == TableMode::PropagateFromEnglish {
                bail!(
                    "Master table \"{}\" cannot use mode 'propagateFromEnglish'",
                    entry.name
                );
            }
        }

        Ok(())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            master_table: self.master_table.clone(),
            pass: PassOptions {
                layout: self.columns,
                separator_policy: self.separator_policy,
            },
            continue_on_missing_table: self.continue_on_missing_table,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
