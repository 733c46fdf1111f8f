use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{ComponentContract, Manifest};

pub const REPORT_TITLE: &str = "# Vue Pact Report";

/// Render the whole manifest as one Markdown document.
///
/// Sections with nothing to show are left out.
pub fn render_markdown(manifest: &Manifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", REPORT_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Scanned {} component(s) at {}.",
        manifest.components.len(),
        manifest.scanned_at
    );

    for contract in &manifest.components {
        let _ = writeln!(out);
        render_component(contract, &mut out);
    }

    out
}

pub fn write_markdown(manifest: &Manifest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, render_markdown(manifest))
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

fn render_component(contract: &ComponentContract, out: &mut String) {
    let _ = writeln!(out, "## {} (`{}`)", contract.name, contract.path);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Props ({})** | **Emits ({})** | **Slots ({})** | **Cohesion {}**",
        contract.props.len(),
        contract.events.len(),
        contract.slots.len(),
        contract.metrics.cohesion
    );

    if !contract.props.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "| name | type | required | default |");
        let _ = writeln!(out, "| --- | --- | --- | --- |");
        for prop in &contract.props {
            let default = prop
                .default
                .as_deref()
                .map(|d| format!("`{}`", escape_cell(d)))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                prop.name,
                escape_cell(&prop.ty),
                if prop.required { "yes" } else { "no" },
                default
            );
        }
    }

    if !contract.events.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "**Emits:** {}", contract.events.join(", "));
    }

    if !contract.slots.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "**Slots:** {}", contract.slots.join(", "));
    }

    if !contract.diagnostics.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "**Diagnostics ({})**", contract.diagnostics.len());
        let _ = writeln!(out);
        for diagnostic in &contract.diagnostics {
            let _ = write!(out, "- [{}] {}", diagnostic.rule, escape_html(&diagnostic.message));
            if let Some(excerpt) = &diagnostic.excerpt {
                let _ = write!(out, " (`{}`)", excerpt);
            }
            let _ = writeln!(out);
        }
    }
}

/// Table cells cannot hold raw `|` or newlines.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Keep `<img>` and friends in messages from being rendered as HTML.
fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
