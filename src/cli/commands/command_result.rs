use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::RunReport;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub report: RunReport,
    /// Workbook path as the user wrote it (config value or flag).
    pub workbook: String,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub tables_checked: usize,
    pub rows_checked: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running sheetsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Issues found by `check`. Empty for other commands.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
