use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, WORKBOOK, cell, stderr, stdout};

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_workbook()?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} English master  validate-only 3 rows, 1 keyword normalized, 1 language repaired\n\
         \u{2713} Twi (Ghana)     propagate     3 rows, 1 content filled, 2 keywords extended, 1 language repaired\n\
         \n\
         Dry run: 6 cells would change.\n\
         Run with --apply to write workbook.json.\n"
    );
    assert_eq!(test.read_file("workbook.json")?, WORKBOOK);

    Ok(())
}

#[test]
fn test_apply_writes_workbook() -> Result<()> {
    let test = CliTest::with_workbook()?;

    let output = test.sync_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote workbook.json (6 cells changed)"));

    let workbook = test.read_json("workbook.json")?;
    // Master: skin tone stripped, blank language repaired from the row above.
    assert_eq!(cell(&workbook, "English master", 3, 4), "👋, wave");
    assert_eq!(cell(&workbook, "English master", 3, 3), "English");
    // Target: content filled, keywords extended, language repaired.
    assert_eq!(cell(&workbook, "Twi (Ghana)", 2, 2), "Akwaaba");
    assert_eq!(cell(&workbook, "Twi (Ghana)", 2, 4), "hello, hi");
    assert_eq!(cell(&workbook, "Twi (Ghana)", 3, 2), "Wave hi");
    assert_eq!(cell(&workbook, "Twi (Ghana)", 3, 3), "Twi");
    assert_eq!(cell(&workbook, "Twi (Ghana)", 3, 4), "👋, wave");

    Ok(())
}

#[test]
fn test_second_apply_is_a_no_op() -> Result<()> {
    let test = CliTest::with_workbook()?;

    test.sync_command().arg("--apply").output()?;
    let first = test.read_file("workbook.json")?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No changes needed"));
    assert_eq!(test.read_file("workbook.json")?, first);

    Ok(())
}

#[test]
fn test_only_filters_tables() -> Result<()> {
    let test = CliTest::with_workbook()?;

    let output = test.sync_command().args(["--only", "English*"]).output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("English master"));
    assert!(!stdout.contains("Twi (Ghana)"));

    Ok(())
}

#[test]
fn test_missing_table_fails() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{
          "workbook": "workbook.json",
          "tables": [
            { "name": "English master", "mode": "validateOnly" },
            { "name": "Klingon" },
            { "name": "Twi (Ghana)" }
          ]
        }"#,
    )?;
    test.write_file("workbook.json", WORKBOOK)?;

    let output = test.sync_command().output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\u{2718} Klingon         table not found: \"Klingon\""));
    // The run stops at the missing table.
    assert!(!stdout.contains("Twi (Ghana)"));

    Ok(())
}

#[test]
fn test_apply_saves_cells_written_before_abort() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{
          "workbook": "workbook.json",
          "tables": [
            { "name": "English master", "mode": "validateOnly" },
            { "name": "Klingon" },
            { "name": "Twi (Ghana)" }
          ]
        }"#,
    )?;
    test.write_file("workbook.json", WORKBOOK)?;

    let output = test.sync_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Wrote workbook.json (2 cells changed)"));

    let workbook = test.read_json("workbook.json")?;
    // The master pass ran before the abort and is kept.
    assert_eq!(cell(&workbook, "English master", 3, 4), "👋, wave");
    assert_eq!(cell(&workbook, "English master", 3, 3), "English");
    // The table after the abort was never touched.
    assert_eq!(cell(&workbook, "Twi (Ghana)", 3, 2), "");

    Ok(())
}

#[test]
fn test_missing_table_skipped_when_configured() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{
          "workbook": "workbook.json",
          "continueOnMissingTable": true,
          "tables": [
            { "name": "English master", "mode": "validateOnly" },
            { "name": "Klingon" },
            { "name": "Twi (Ghana)" }
          ]
        }"#,
    )?;
    test.write_file("workbook.json", WORKBOOK)?;

    let output = test.sync_command().output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("warning: Klingon         table not found, skipped"));
    assert!(stdout.contains("\u{2713} Twi (Ghana)"));

    Ok(())
}

#[test]
fn test_disabled_table_is_skipped() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{
          "workbook": "workbook.json",
          "tables": [
            { "name": "English master", "mode": "validateOnly" },
            { "name": "Twi (Ghana)", "enabled": false }
          ]
        }"#,
    )?;
    test.write_file("workbook.json", WORKBOOK)?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(stdout(&output).contains("- Twi (Ghana)     skipped (disabled)"));
    let workbook = test.read_json("workbook.json")?;
    assert_eq!(cell(&workbook, "Twi (Ghana)", 3, 2), "");

    Ok(())
}

#[test]
fn test_workbook_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", crate::CONFIG)?;
    test.write_file("data/other.json", WORKBOOK)?;

    let output = test
        .sync_command()
        .args(["--workbook", "data/other.json", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote data/other.json"));
    assert!(!test.root().join("workbook.json").exists());

    Ok(())
}

#[test]
fn test_unreadable_workbook_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", crate::CONFIG)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read workbook"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{ "columns": { "title": 1, "content": 1, "language": 3, "keywords": 4 } }"#,
    )?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("assigned to more than one role"));

    Ok(())
}
