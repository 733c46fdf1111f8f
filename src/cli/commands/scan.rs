use anyhow::Result;

use super::super::args::ScanArgs;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    core::{Manifest, context::ScanContext},
    report::write_markdown,
};

pub fn scan(args: ScanArgs) -> Result<CommandResult> {
    let ctx = ScanContext::new(&args)?;
    let outcome = ctx.analyze();

    let manifest = Manifest::new(outcome.components);
    manifest.write(&ctx.manifest_path)?;
    if let Some(report_path) = &ctx.report_path {
        write_markdown(&manifest, report_path)?;
    }

    Ok(CommandResult {
        diagnostic_count: manifest.diagnostic_count(),
        exit_on_diagnostics: args.strict,
        summary: CommandSummary::Scan(ScanSummary {
            manifest,
            manifest_path: ctx.manifest_path,
            report_path: ctx.report_path,
            skipped: outcome.skipped,
        }),
    })
}
