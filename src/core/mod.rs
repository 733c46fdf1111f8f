//! Contract extraction engine.
//!
//! ## Pipeline
//!
//! For each file, [`analyze_component`] runs:
//!
//! 1. `segment`: split the source into template / script setup / plain script regions
//! 2. `extract`: props (with precedence merge), events, slots
//! 3. `usage`: prop cross-reference against the template, size metrics
//! 4. `crate::rules`: accessibility rules, then unused-prop findings
//!
//! Everything above is pure and per-file. Batch concerns (file discovery,
//! parallel reading, skipped files) live in `file_scanner` and `context`;
//! persistence in `manifest`.

pub mod analyze;
pub mod context;
pub mod contract;
pub mod extract;
pub mod file_scanner;
pub mod manifest;
pub mod segment;
pub mod usage;

pub use analyze::analyze_component;
pub use contract::{
    ComponentContract, DEFAULT_SLOT, PropOrigin, PropertyDeclaration, UNKNOWN_TYPE, UsageMetrics,
    component_name,
};
pub use manifest::Manifest;
pub use segment::{Regions, segment_blocks};
