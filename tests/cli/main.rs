use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod check;
mod init;
mod sync;

const BIN_NAME: &str = "sheetsync";

pub const CONFIG: &str = r#"{
  "workbook": "workbook.json",
  "tables": [
    { "name": "English master", "mode": "validateOnly" },
    { "name": "Twi (Ghana)", "mode": "propagateFromEnglish" }
  ]
}"#;

pub const WORKBOOK: &str = r#"{
  "sheets": {
    "English master": [
      ["Title", "Content", "Language", "Keywords"],
      ["Greeting", "Hello", "English", "hello, hi"],
      ["Wave", "Wave hi", null, "👋🏽, wave"]
    ],
    "Twi (Ghana)": [
      ["Title", "Content", "Language", "Keywords"],
      ["Greeting", "Akwaaba", "Twi", "hello"],
      ["Wave", "", "", "👋"]
    ]
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with the two-table config and workbook above.
    pub fn with_workbook() -> Result<Self> {
        let test = Self::with_file(".sheetsyncrc.json", CONFIG)?;
        test.write_file("workbook.json", WORKBOOK)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn sync_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("sync");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}

/// Text of a cell in a workbook JSON value (1-based row and column).
pub fn cell(workbook: &Value, sheet: &str, row: usize, col: usize) -> String {
    match &workbook["sheets"][sheet][row - 1][col - 1] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
