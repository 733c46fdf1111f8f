//! Slot name extraction from template markup.

use std::sync::LazyLock;

use regex::Regex;

use super::NameSet;
use crate::core::contract::DEFAULT_SLOT;

static SLOT_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<slot\b[^>]*>").unwrap());

static NAME_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)name\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

// Opening tag; quoted attribute values may contain `>`.
static OPEN_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<[A-Za-z](?:"[^"]*"|'[^']*'|[^"'>])*>"#).unwrap());

// Group 1: attribute name. Values are matched so their text is skipped.
static ATTRIBUTE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s([^\s"'=<>/]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#).unwrap()
});

static SLOT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Collect slot names declared (`<slot>`) or consumed (`v-slot`, `#name`).
pub fn extract_slots(markup: &str) -> Vec<String> {
    let mut slots = NameSet::new();

    for tag in SLOT_TAG_REGEX.find_iter(markup) {
        let name = NAME_ATTR_REGEX
            .captures(tag.as_str())
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SLOT);
        slots.insert(name);
    }

    for tag in OPEN_TAG_REGEX.find_iter(markup) {
        for caps in ATTRIBUTE_NAME_REGEX.captures_iter(tag.as_str()) {
            if let Some(name) = consumed_slot(&caps[1]) {
                slots.insert(name);
            }
        }
    }

    slots.into_vec()
}

/// Slot consumed by an attribute: `v-slot:name`, `#name` or bare `v-slot`.
fn consumed_slot(attribute: &str) -> Option<&str> {
    if attribute == "v-slot" {
        return Some(DEFAULT_SLOT);
    }
    attribute
        .strip_prefix("v-slot:")
        .or_else(|| attribute.strip_prefix('#'))
        .filter(|name| SLOT_NAME_REGEX.is_match(name))
}
