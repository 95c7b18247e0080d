//! Report formatting and printing utilities.
//!
//! Sync results are printed one line per table; check issues are printed
//! cargo-style. Kept apart from the core so the passes can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, SyncSummary};
use crate::core::{TableOutcome, TableSummary};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of any command to stdout (errors of `init` to stderr).
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync_to(summary, &mut io::stdout().lock()),
        CommandSummary::Check(summary) => {
            let mut out = io::stdout().lock();
            if result.issues.is_empty() {
                print_success_to(summary, &mut out);
            } else {
                report_to(&result.issues, &mut out);
            }
        }
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
    }
}

// ============================================================
// sync
// ============================================================

/// Print one line per manifest entry followed by a dry-run/apply footer.
pub fn print_sync_to<W: Write>(summary: &SyncSummary, writer: &mut W) {
    let outcomes = &summary.report.outcomes;
    let name_width = outcomes
        .iter()
        .map(|o| UnicodeWidthStr::width(o.name()))
        .max()
        .unwrap_or(0);

    for outcome in outcomes {
        let name = outcome.name();
        let padding = name_width - UnicodeWidthStr::width(name);
        match outcome {
            TableOutcome::Completed(table) => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {} {}",
                    SUCCESS_MARK.green(),
                    name.bold(),
                    "",
                    format!("{:<13}", table.mode.to_string()).dimmed().cyan(),
                    describe_changes(table),
                    padding = padding
                );
            }
            TableOutcome::Skipped { .. } => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {}",
                    "-".dimmed(),
                    name.dimmed(),
                    "",
                    "skipped (disabled)".dimmed(),
                    padding = padding
                );
            }
            TableOutcome::Missing { .. } => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {}",
                    "warning:".bold().yellow(),
                    name,
                    "",
                    "table not found, skipped".yellow(),
                    padding = padding
                );
            }
            TableOutcome::Failed { error, .. } => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {}",
                    FAILURE_MARK.red(),
                    name.bold(),
                    "",
                    error.to_string().red(),
                    padding = padding
                );
            }
        }
    }

    let changed = summary.report.changed_cells();
    let _ = writeln!(writer);
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} ({} {} changed)",
            "Wrote".green().bold(),
            summary.workbook,
            changed,
            plural(changed, "cell", "cells")
        );
    } else if changed > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} would change.",
            "Dry run:".yellow().bold(),
            changed,
            plural(changed, "cell", "cells")
        );
        let _ = writeln!(
            writer,
            "Run with {} to write {}.",
            "--apply".cyan(),
            summary.workbook
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No changes needed".green()
        );
    }
}

fn describe_changes(table: &TableSummary) -> String {
    let rows = format!(
        "{} {}",
        table.rows_visited,
        plural(table.rows_visited, "row", "rows")
    );
    if table.changed_cells() == 0 {
        return format!("{}, no changes", rows);
    }

    let parts: Vec<String> = [
        (
            table.keywords_normalized,
            plural(table.keywords_normalized, "keyword", "keywords"),
            "normalized",
        ),
        (table.content_filled, "content", "filled"),
        (
            table.keywords_extended,
            plural(table.keywords_extended, "keyword", "keywords"),
            "extended",
        ),
        (
            table.languages_repaired,
            plural(table.languages_repaired, "language", "languages"),
            "repaired",
        ),
    ]
    .into_iter()
    .filter(|(count, _, _)| *count > 0)
    .map(|(count, noun, verb)| format!("{} {} {}", count, noun, verb))
    .collect();

    format!("{}, {}", rows, parts.join(", "))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// check
// ============================================================

/// Print issues in cargo-style format to a writer.
///
/// Issues are sorted by table, row and column, then summarized.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(|a, b| {
        a.location()
            .cmp(b.location())
            .then_with(|| a.report_rule().cmp(&b.report_rule()))
    });

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} {} - no issues found",
            summary.tables_checked,
            plural(summary.tables_checked, "table", "tables"),
            summary.rows_checked,
            plural(summary.rows_checked, "row", "rows")
        )
        .green()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.location());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

// ============================================================
// init
// ============================================================

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(message) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), message);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.config_path.display()).green()
            );
        }
    }
}
