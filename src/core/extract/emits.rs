//! Event name extraction.
//!
//! Union of declared events and emission calls, in first-occurrence order:
//!
//! - `defineEmits(['save', 'close'])`
//! - `defineEmits<{ (e: 'save', id: number): void; close: [] }>()`
//! - `$emit('save')` anywhere in either script block
//! - `emit('save')` where `emit` is bound from `defineEmits`

use std::sync::LazyLock;

use regex::Regex;

use super::NameSet;
use super::scan::{Angles, braced_body, split_key_value, split_top_level, unquote};
use crate::core::segment::Regions;

// Group 1: list body.
static DEFINE_EMITS_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bdefineEmits\s*\(\s*\[(.*?)\]\s*\)").unwrap());

static DEFINE_EMITS_TYPED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdefineEmits\s*<\s*\{").unwrap());

static QUOTED_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([^'"`]+)['"`]"#).unwrap());

// `(e: 'change', value: string): void`
static CALL_SIGNATURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\(\s*[\w$]+\s*:\s*['"]([^'"]+)['"]"#).unwrap());

static DOLLAR_EMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\$emit\s*\(\s*['"`]([^'"`]+)['"`]"#).unwrap());

// Group 1: local binding of the defineEmits result.
static EMIT_BINDING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*defineEmits\b").unwrap()
});

/// Collect event names from both script regions.
pub fn extract_events(regions: &Regions<'_>) -> Vec<String> {
    let mut events = NameSet::new();

    collect_declared_list(regions.script_setup, &mut events);
    collect_declared_type(regions.script_setup, &mut events);
    for script in regions.scripts() {
        collect_dollar_emits(script, &mut events);
    }
    collect_bound_emits(regions.script_setup, &mut events);

    events.into_vec()
}

fn collect_declared_list(script: &str, events: &mut NameSet) {
    for caps in DEFINE_EMITS_LIST_REGEX.captures_iter(script) {
        let list = caps.get(1).map_or("", |m| m.as_str());
        for name in QUOTED_NAME_REGEX.captures_iter(list) {
            events.insert(&name[1]);
        }
    }
}

fn collect_declared_type(script: &str, events: &mut NameSet) {
    for m in DEFINE_EMITS_TYPED_REGEX.find_iter(script) {
        let Some(body) = braced_body(script, m.end() - 1) else {
            continue;
        };

        for entry in split_top_level(body, &[';', ',', '\n'], Angles::Brackets) {
            if entry.starts_with('(') {
                if let Some(caps) = CALL_SIGNATURE_REGEX.captures(entry) {
                    events.insert(&caps[1]);
                }
            } else if let Some((key, value)) = split_key_value(entry)
                && value.starts_with('[')
            {
                events.insert(unquote(key));
            }
        }
    }
}

fn collect_dollar_emits(script: &str, events: &mut NameSet) {
    for caps in DOLLAR_EMIT_REGEX.captures_iter(script) {
        events.insert(&caps[1]);
    }
}

fn collect_bound_emits(script: &str, events: &mut NameSet) {
    let Some(binding) = EMIT_BINDING_REGEX.captures(script) else {
        return;
    };
    let pattern = format!(
        r#"(?:^|[^\w$.]){}\s*\(\s*['"`]([^'"`]+)['"`]"#,
        regex::escape(&binding[1])
    );
    let Ok(call_regex) = Regex::new(&pattern) else {
        return;
    };

    for caps in call_regex.captures_iter(script) {
        events.insert(&caps[1]);
    }
}
