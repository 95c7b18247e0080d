use anyhow::Result;
use tracing::info;

use super::{
    CommandResult, CommandSummary, SyncSummary,
    context::{CommandContext, parse_only},
    helper::finish,
};
use crate::{cli::args::SyncCommand, core::run_manifest};

/// Run the configured manifest against the workbook.
///
/// The workbook is processed in memory; with `--apply` it is written back
/// even if a table aborted, keeping the cells written before the failure.
pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let only = parse_only(cmd.only.as_deref())?;
    let mut workbook = ctx.open_workbook()?;
    let entries = ctx.manifest(only.as_ref());

    let report = run_manifest(&mut workbook, &entries, &ctx.config.run_options());

    if cmd.apply {
        workbook.save(&ctx.workbook_path)?;
        info!(path = %ctx.workbook_path.display(), "saved workbook");
    }

    Ok(finish(
        CommandSummary::Sync(SyncSummary {
            report,
            workbook: ctx.workbook_label,
            is_apply: cmd.apply,
        }),
        Vec::new(),
        true,
    ))
}
