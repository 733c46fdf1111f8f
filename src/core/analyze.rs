//! Per-file contract assembly.

use crate::core::contract::{ComponentContract, component_name};
use crate::core::extract::{extract_events, extract_props, extract_slots};
use crate::core::segment::segment_blocks;
use crate::core::usage::{analyze_prop_usage, compute_metrics};
use crate::rules::{check_markup, check_unused_props};

/// Build the contract of one component from its source text.
///
/// Pure and infallible: missing blocks or unrecognized idioms produce empty
/// sections, never an error. `path` is only used for display and naming.
pub fn analyze_component(source: &str, path: &str) -> ComponentContract {
    let regions = segment_blocks(source);

    let props = extract_props(&regions);
    let events = extract_events(&regions);
    let slots = extract_slots(regions.markup);

    let usage = analyze_prop_usage(regions.markup, &props);
    let metrics = compute_metrics(&regions, &usage);

    let mut diagnostics = check_markup(regions.markup);
    diagnostics.extend(check_unused_props(&usage));

    ComponentContract {
        path: path.to_string(),
        name: component_name(path),
        props,
        events,
        slots,
        metrics,
        diagnostics,
    }
}
