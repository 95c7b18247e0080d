use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Report, Severity};

/// Build a [`CommandResult`], counting errors and warnings from the issues
/// and from the summary itself.
pub fn finish(summary: CommandSummary, issues: Vec<Issue>, exit_on_errors: bool) -> CommandResult {
    let mut error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let mut warning_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();

    match &summary {
        CommandSummary::Sync(sync) => {
            if sync.report.failure().is_some() {
                error_count += 1;
            }
            warning_count += sync.report.missing_count();
        }
        CommandSummary::Init(init) if init.error.is_some() => error_count += 1,
        CommandSummary::Init(_) | CommandSummary::Check(_) => {}
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}
