use anyhow::{Context, Result};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, WORKBOOK, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["workbook"], "./workbook.json");
    assert_eq!(parsed["masterTable"], "English master");
    assert_eq!(parsed["separatorPolicy"], "legacy");
    assert_eq!(parsed["maxContentLength"], 4096);
    assert_eq!(parsed["columns"]["keywords"], 4);
    assert_eq!(parsed["tables"][0]["mode"], "validateOnly");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @"✓ Created .sheetsyncrc.json");
    assert!(test.root().join(".sheetsyncrc.json").exists());
    assert_config_content(&test.read_file(".sheetsyncrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".sheetsyncrc.json already exists"));
    assert_eq!(test.read_file(".sheetsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("workbook.json", WORKBOOK)?;

    let output = test.sync_command().output()?;
    assert!(
        output.status.success(),
        "Sync should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
