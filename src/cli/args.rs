//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Run the table manifest against the workbook (dry-run by default)
//! - `check`: Lint the workbook for keyword and content problems
//! - `init`: Initialize a sheetsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Workbook JSON file (overrides config file)
    #[arg(long, env = "SHEETSYNC_WORKBOOK")]
    pub workbook: Option<PathBuf>,

    /// Master table name (overrides config file)
    #[arg(long)]
    pub master_table: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the workbook (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Only process tables whose name matches this glob, e.g. "*(Kenya)"
    #[arg(long)]
    pub only: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Propagate master content and keywords into the language tables
    Sync(SyncCommand),
    /// Check tables for long content, mixed emoji keywords and duplicates
    Check(CheckCommand),
    /// Initialize a new .sheetsyncrc.json configuration file
    Init,
}
