//! Vuepact - component contract extraction for Vue single-file components
//!
//! Vuepact reads `.vue` files and records, per component, the props it
//! declares, the events it emits, the slots it exposes, a few size and usage
//! metrics, and advisory diagnostics (accessibility heuristics and unused
//! props). Extraction is lexical and best-effort; no script or template
//! grammar is implemented.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (scan, show, init, serve)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine, batch scanning and the manifest
//! - `issues`: Diagnostic and skipped-file types
//! - `mcp`: Model Context Protocol server implementation
//! - `report`: Markdown rendering of a manifest
//! - `rules`: Diagnostic rules over template markup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod report;
pub mod rules;
pub mod utils;
