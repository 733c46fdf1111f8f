use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::ShowArgs;
use super::{CommandResult, CommandSummary, ShowSummary};
use crate::{config::load_config, core::Manifest};

/// Read-only: loads a manifest and never re-analyzes sources.
pub fn show(args: ShowArgs) -> Result<CommandResult> {
    let manifest_path = match args.manifest {
        Some(path) => path,
        None => PathBuf::from(load_config(Path::new("."))?.config.manifest_path),
    };
    let manifest = Manifest::load(&manifest_path)?;

    let query = args.query.unwrap_or_default();
    let matches: Vec<_> = manifest.filter(&query).into_iter().cloned().collect();

    let selected = if matches.is_empty() {
        None
    } else if args.select == 0 || args.select > matches.len() {
        anyhow::bail!(
            "--select {} is out of range ({} matching component(s))",
            args.select,
            matches.len()
        );
    } else {
        Some(args.select - 1)
    };

    let diagnostic_count = selected.map_or(0, |i| matches[i].diagnostics.len());

    Ok(CommandResult {
        summary: CommandSummary::Show(ShowSummary {
            manifest_path,
            query: (!query.is_empty()).then_some(query),
            matches,
            selected,
        }),
        diagnostic_count,
        exit_on_diagnostics: false,
    })
}
