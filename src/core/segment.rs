//! Block segmentation for single-file components.
//!
//! Splits a `.vue` source into its `<template>`, `<script setup>` and plain
//! `<script>` bodies. Each body is a slice of the original text.
//!
//! Matching is first-open to first-close: a `<template>` nested inside the
//! outer template ends the region early, and only the first block of each
//! kind is kept. Both are known limitations of the lexical approach.

use regex::Regex;
use std::sync::LazyLock;

static TEMPLATE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<template\b[^>]*>(.*?)</template\s*>").unwrap());

// Group 1: opening tag attributes, group 2: body.
static SCRIPT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").unwrap());

static SETUP_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsetup\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Markup,
    ScriptSetupLike,
    ScriptPlainLike,
}

/// The three regions of one document. Absent regions are empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions<'a> {
    pub markup: &'a str,
    pub script_setup: &'a str,
    pub script_plain: &'a str,
}

impl<'a> Regions<'a> {
    pub fn get(&self, kind: RegionKind) -> &'a str {
        match kind {
            RegionKind::Markup => self.markup,
            RegionKind::ScriptSetupLike => self.script_setup,
            RegionKind::ScriptPlainLike => self.script_plain,
        }
    }

    /// Both script regions, setup first.
    pub fn scripts(&self) -> [&'a str; 2] {
        [self.script_setup, self.script_plain]
    }
}

/// Segment `source` into its regions. Never fails.
pub fn segment_blocks(source: &str) -> Regions<'_> {
    let markup = TEMPLATE_BLOCK_REGEX
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());

    let mut script_setup: Option<&str> = None;
    let mut script_plain: Option<&str> = None;

    for caps in SCRIPT_BLOCK_REGEX.captures_iter(source) {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let slot = if SETUP_MARKER_REGEX.is_match(attrs) {
            &mut script_setup
        } else {
            &mut script_plain
        };
        if slot.is_none() {
            *slot = Some(body);
        }

        if script_setup.is_some() && script_plain.is_some() {
            break;
        }
    }

    Regions {
        markup,
        script_setup: script_setup.unwrap_or(""),
        script_plain: script_plain.unwrap_or(""),
    }
}
