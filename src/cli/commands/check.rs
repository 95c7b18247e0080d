use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, context::CommandContext, helper::finish};
use crate::{
    cli::args::CheckCommand,
    rules::{CheckRule, CheckSettings, run_checks},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let workbook = ctx.open_workbook()?;

    let rules = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };
    let settings = CheckSettings {
        layout: ctx.config.columns,
        master_table: ctx.config.master_table.clone(),
        max_content_length: ctx.config.max_content_length,
        duplicate_keyword_exemptions: ctx.config.duplicate_keyword_exemptions.clone(),
    };

    let output = run_checks(&workbook, &ctx.checked_tables(), &rules, &settings)?;

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            tables_checked: output.tables_checked,
            rows_checked: output.rows_checked,
        }),
        output.issues,
        true,
    ))
}
