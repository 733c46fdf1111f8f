use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{ComponentContract, Manifest};
use crate::issues::SkippedFile;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Show(ShowSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub manifest_path: PathBuf,
    pub query: Option<String>,
    pub matches: Vec<ComponentContract>,
    /// Index into `matches` of the component shown in full.
    pub selected: Option<usize>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running vuepact commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub diagnostic_count: usize,
    /// If true, exit code 1 should be returned when diagnostic_count > 0.
    pub exit_on_diagnostics: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        let failed = match &self.summary {
            CommandSummary::Scan(_) => self.exit_on_diagnostics && self.diagnostic_count > 0,
            CommandSummary::Show(summary) => summary.selected.is_none(),
            CommandSummary::Init(summary) => !summary.created,
        };
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
