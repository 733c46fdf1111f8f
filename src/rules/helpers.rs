//! Lexical tag and attribute matching shared by the markup rules.

use std::sync::LazyLock;

use regex::Regex;

// Group 1: name, groups 2-4: double-quoted, single-quoted or bare value.
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'=<>/]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#).unwrap()
});

/// Regex matching opening (or self-closing) tags named `tag`.
///
/// Case-sensitive: `<Button>` is a component, not a native `<button>`.
/// Only called from `LazyLock` initializers with a rule's static tag name.
pub fn tag_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"<{}(?:\s[^>]*)?/?>", regex::escape(tag))).unwrap()
}

/// One attribute of a tag, with binding prefixes (`:`, `v-bind:`) removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// Static value. `None` for boolean attributes.
    pub value: Option<&'a str>,
    /// True for `:name` / `v-bind:name` bindings.
    pub bound: bool,
}

/// Parse the attributes of a single tag such as `<img src="a.png" :alt="x" />`.
pub fn parse_attributes(tag: &str) -> Vec<Attribute<'_>> {
    let inner = tag
        .strip_prefix('<')
        .unwrap_or(tag)
        .trim_end_matches('>')
        .trim_end_matches('/');
    let attrs_start = inner
        .find(char::is_whitespace)
        .unwrap_or(inner.len());
    let attrs = &inner[attrs_start..];

    ATTRIBUTE_REGEX
        .captures_iter(attrs)
        .filter_map(|caps| {
            let raw_name = caps.get(1)?.as_str();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str());

            let (name, bound) = match raw_name
                .strip_prefix("v-bind:")
                .or_else(|| raw_name.strip_prefix(':'))
            {
                Some(name) => (name, true),
                None => (raw_name, false),
            };

            Some(Attribute { name, value, bound })
        })
        .collect()
}

/// True if the tag carries `name`, statically or bound.
pub fn has_attribute(attrs: &[Attribute<'_>], name: &str) -> bool {
    attrs.iter().any(|attr| attr.name == name)
}

/// Static value of `name`, ignoring bound versions.
pub fn static_value<'a>(attrs: &[Attribute<'a>], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|attr| attr.name == name && !attr.bound)
        .and_then(|attr| attr.value)
}
