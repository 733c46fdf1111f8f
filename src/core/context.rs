use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::ScanArgs,
    config::load_config,
    core::{analyze::analyze_component, contract::ComponentContract, file_scanner::scan_files},
    issues::SkippedFile,
};

/// Output of one batch run.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Contracts sorted by display path.
    pub components: Vec<ComponentContract>,
    /// Files that could not be read. They have no contract.
    pub skipped: Vec<SkippedFile>,
}

/// Batch orchestration for `vuepact scan`.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--out`, `--report`)
/// 2. `.vuepactrc.json` found from the scan root upwards
/// 3. Built-in defaults
pub struct ScanContext {
    /// Directory being scanned. Display paths are relative to it.
    pub root_dir: PathBuf,

    /// Component files to analyze.
    pub files: BTreeSet<String>,

    pub manifest_path: PathBuf,
    pub report_path: Option<PathBuf>,
}

impl ScanContext {
    pub fn new(args: &ScanArgs) -> Result<Self> {
        let verbose = args.common.verbose;
        let root_dir = args.path.clone();

        if !root_dir.is_dir() {
            anyhow::bail!("Scan root is not a directory: {}", root_dir.display());
        }
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .vuepactrc.json found, using default configuration");
        }
        let config = config_result.config;

        // CLI paths are taken as given; config paths are relative to the scan root.
        let manifest_path = match &args.out {
            Some(out) => out.clone(),
            None => resolve_from_root(&root_dir, &config.manifest_path),
        };
        let report_path = match (&args.report, &config.report_path) {
            (Some(report), _) => Some(report.clone()),
            (None, Some(report)) => Some(resolve_from_root(&root_dir, report)),
            (None, None) => None,
        };

        let scan_result = scan_files(path, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            root_dir,
            files: scan_result.files,
            manifest_path,
            report_path,
        })
    }

    /// Read and analyze every file in parallel.
    pub fn analyze(&self) -> ScanOutcome {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| {
                let display_path = self.display_path(file_path);
                let result = fs::read_to_string(file_path)
                    .map(|source| analyze_component(&source, &display_path))
                    .map_err(|e| format!("Failed to read file: {}", e));
                (display_path, result)
            })
            .collect();

        let mut outcome = ScanOutcome::default();
        for (display_path, result) in results {
            match result {
                Ok(contract) => outcome.components.push(contract),
                Err(error) => outcome.skipped.push(SkippedFile {
                    file_path: display_path,
                    error,
                }),
            }
        }

        outcome.components.sort_by(|a, b| a.path.cmp(&b.path));
        outcome
    }

    /// Path relative to the scan root, always with `/` separators.
    fn display_path(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        let relative = path.strip_prefix(&self.root_dir).unwrap_or(path);
        relative
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn resolve_from_root(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
