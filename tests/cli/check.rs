use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CONFIG, CliTest, stderr, stdout};

#[test]
fn test_clean_workbook() -> Result<()> {
    let test = CliTest::with_workbook()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @"✓ Checked 2 tables, 4 rows - no issues found");

    Ok(())
}

#[test]
fn test_keyword_issues() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", CONFIG)?;
    test.write_file(
        "workbook.json",
        r#"{
          "sheets": {
            "English master": [
              ["Title", "Content", "Language", "Keywords"],
              ["Greeting", "Hello", "English", "hello, 👋hi"],
              ["Wave", "Wave", "English", "hello"],
              ["myths_1", "Myth", "English", "hello"]
            ],
            "Twi (Ghana)": [
              ["Title", "Content", "Language", "Keywords"],
              ["Greeting", "Akwaaba", "", "hello"]
            ]
          }
        }"#,
    )?;

    let output = test.check_command().output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains(
        "error: \"Invalid keyword, more than just emoji: 👋hi\"  emoji-with-text\n  --> English master:2:4"
    ));
    assert!(stdout.contains(
        "error: \"Duplicate keyword hello\"  duplicate-keyword\n  --> English master:3:4\n  = note: first used in row 2"
    ));
    assert!(!stdout.contains("English master:4:4"));
    assert!(stdout.contains(
        "warning: \"Missing language on first content row\"  missing-language\n  --> Twi (Ghana):2:3"
    ));
    assert!(stdout.contains("\u{2718} 3 problems (2 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", CONFIG)?;
    test.write_file(
        "workbook.json",
        r#"{
          "sheets": {
            "English master": [
              ["Title", "Content", "Language", "Keywords"],
              ["Greeting", "Hello", "", "hello, 👋hi"]
            ],
            "Twi (Ghana)": [
              ["Title", "Content", "Language", "Keywords"],
              ["Greeting", "Akwaaba", "Twi", "hello"]
            ]
          }
        }"#,
    )?;

    let output = test.check_command().arg("missing-language").output()?;

    let stdout = stdout(&output);
    // Warnings alone do not fail the check.
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("missing-language"));
    assert!(!stdout.contains("emoji-with-text"));

    Ok(())
}

#[test]
fn test_title_issues() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", CONFIG)?;
    test.write_file(
        "workbook.json",
        r#"{
          "sheets": {
            "English master": [
              ["Title", "Content", "Language", "Keywords"],
              ["eng_greeting", "Hello", "eng", "hello"],
              ["eng wave", "Wave", "eng", "wave"]
            ],
            "Twi (Ghana)": [
              ["Title", "Content", "Language", "Keywords"],
              ["twi_greeting", "Akwaaba", "twi", "hello"],
              ["twi_farewell", "", "twi", "bye"]
            ]
          }
        }"#,
    )?;

    let output = test.check_command().output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains(
        "warning: \"Content title is not normalized: eng wave\"  title-format\n  --> English master:3:1\n  = note: expected eng_wave"
    ));
    assert!(stdout.contains(
        "error: \"Missing english content farewell\"  title-mismatch\n  --> Twi (Ghana):3:1\n  = note: master row 3 is eng wave"
    ));
    assert!(stdout.contains("\u{2718} 2 problems (1 error, 1 warning)"));

    Ok(())
}

#[test]
fn test_content_too_long() -> Result<()> {
    let test = CliTest::with_file(
        ".sheetsyncrc.json",
        r#"{
          "workbook": "workbook.json",
          "maxContentLength": 5
        }"#,
    )?;
    test.write_file(
        "workbook.json",
        r#"{
          "sheets": {
            "English master": [
              ["Title", "Content", "Language", "Keywords"],
              ["Greeting", "Hello there", "English", "hello"]
            ]
          }
        }"#,
    )?;

    let output = test.check_command().output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error: \"Content too long: Greeting\"  content-too-long"));
    assert!(stdout.contains("  = note: 11 characters, limit is 5"));

    Ok(())
}

#[test]
fn test_missing_master_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".sheetsyncrc.json", CONFIG)?;
    test.write_file("workbook.json", r#"{ "sheets": {} }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("table not found: \"English master\""));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0));
    for command in ["sync", "check", "init"] {
        assert!(stdout.contains(command), "help should list {}", command);
    }

    Ok(())
}
