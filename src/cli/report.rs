//! Report formatting and printing utilities.
//!
//! Diagnostics are printed in cargo-style format. Kept apart from the
//! engine so vuepact can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary, ShowSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ComponentContract;
use crate::issues::{Diagnostic, SkippedFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Scan(summary) => {
            print_scan_to(summary, &mut stdout);
            print_skipped_warning_to(&summary.skipped, verbose, &mut stderr);
        }
        CommandSummary::Show(summary) => print_show_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// scan
// ============================================================

pub fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let components = &summary.manifest.components;

    for contract in components {
        for diagnostic in &contract.diagnostics {
            print_diagnostic(diagnostic, &contract.path, writer);
        }
    }

    let total = summary.manifest.diagnostic_count();
    let component_word = plural(components.len(), "component", "components");
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} - no diagnostics found",
                components.len(),
                component_word
            )
            .green()
        );
    } else {
        let affected = components
            .iter()
            .filter(|c| !c.diagnostics.is_empty())
            .count();
        let _ = writeln!(
            writer,
            "{} {} {} in {} of {} {}",
            FAILURE_MARK.red(),
            total,
            plural(total, "diagnostic", "diagnostics").yellow(),
            affected,
            components.len(),
            component_word
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        "Wrote manifest:".bold(),
        summary.manifest_path.display()
    );
    if let Some(report_path) = &summary.report_path {
        let _ = writeln!(writer, "{} {}", "Wrote report:".bold(), report_path.display());
    }
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, path: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        diagnostic.message,
        diagnostic.rule.to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
    if let Some(excerpt) = &diagnostic.excerpt {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), excerpt);
    }
    let _ = writeln!(writer);
}

/// Print a warning about files that could not be read.
pub fn print_skipped_warning_to<W: Write>(skipped: &[SkippedFile], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }
    if verbose {
        for file in skipped {
            let _ = writeln!(writer, "{} skipped {}", "warning:".bold().yellow(), file);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        );
    }
}

// ============================================================
// show
// ============================================================

pub fn print_show_to<W: Write>(summary: &ShowSummary, writer: &mut W) {
    let Some(selected) = summary.selected else {
        let _ = writeln!(
            writer,
            "{} No components match {} in {}",
            FAILURE_MARK.red(),
            summary
                .query
                .as_deref()
                .map(|q| format!("\"{}\"", q))
                .unwrap_or_else(|| "(all)".to_string()),
            summary.manifest_path.display()
        );
        return;
    };

    if summary.matches.len() > 1 {
        print_match_list(&summary.matches, selected, writer);
        let _ = writeln!(writer);
    }
    print_contract(&summary.matches[selected], writer);
}

fn print_match_list<W: Write>(matches: &[ComponentContract], selected: usize, writer: &mut W) {
    let _ = writeln!(writer, "{} matching components:", matches.len());

    let index_width = matches.len().to_string().len();
    let name_width = matches
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0);

    for (i, contract) in matches.iter().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        let _ = writeln!(
            writer,
            "{} {:>index_width$}. {}  {}",
            marker.cyan(),
            i + 1,
            pad(&contract.name, name_width).bold(),
            contract.path.dimmed(),
            index_width = index_width
        );
    }
}

fn print_contract<W: Write>(contract: &ComponentContract, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} ({})",
        contract.name.bold(),
        contract.path.dimmed()
    );

    let _ = writeln!(writer, "  {}", format!("props ({}):", contract.props.len()).bold());
    let name_width = column_width(contract.props.iter().map(|p| p.name.as_str()));
    let type_width = column_width(contract.props.iter().map(|p| p.ty.as_str()));
    for prop in &contract.props {
        let mut line = format!(
            "    {}  {}  {}",
            pad(&prop.name, name_width),
            pad(&prop.ty, type_width),
            if prop.required { "required" } else { "optional" }
        );
        if let Some(default) = &prop.default {
            line.push_str(&format!("  default: {}", default));
        }
        let _ = writeln!(writer, "{}", line.trim_end());
    }

    let _ = writeln!(
        writer,
        "  {} {}",
        format!("emits ({}):", contract.events.len()).bold(),
        contract.events.join(", ")
    );
    let _ = writeln!(
        writer,
        "  {} {}",
        format!("slots ({}):", contract.slots.len()).bold(),
        contract.slots.join(", ")
    );

    let metrics = &contract.metrics;
    let _ = writeln!(
        writer,
        "  {} {} template lines, {} script lines, {} branches, cohesion {} ({}/{})",
        "metrics:".bold(),
        metrics.template_lines,
        metrics.script_lines,
        metrics.branches,
        metrics.cohesion,
        metrics.props_used,
        metrics.props_declared
    );

    let _ = writeln!(
        writer,
        "  {}",
        format!("diagnostics ({}):", contract.diagnostics.len()).bold()
    );
    for diagnostic in &contract.diagnostics {
        let _ = writeln!(
            writer,
            "    {} {}",
            format!("[{}]", diagnostic.rule).yellow(),
            diagnostic.message
        );
    }
}

// ============================================================
// init
// ============================================================

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Right-pad to a display width; wide characters count double.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}
