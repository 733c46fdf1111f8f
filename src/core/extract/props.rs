//! Property declaration extraction.
//!
//! Recognizes three declaration idioms:
//!
//! 1. `defineProps<{ title: string; count?: number }>()` or `defineProps<Props>()`
//!    with `interface Props { ... }` / `type Props = { ... }` in the same script
//! 2. `defineProps({ title: String, count: { type: Number, default: 0 } })`
//! 3. `export default { props: { ... } }` in the plain script block
//!
//! The results are merged by name; idioms 1 and 2 win over idiom 3.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::scan::{
    Angles, braced_body, find_matching_close, split_key_value, split_top_level, unquote,
};
use crate::core::contract::{PropOrigin, PropertyDeclaration, UNKNOWN_TYPE};
use crate::core::segment::Regions;

// Group 1: type parameter text, up to the first `>` followed by `()`.
static DEFINE_PROPS_GENERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bdefineProps\s*<(.*?)>\s*\(\s*\)").unwrap());

static DEFINE_PROPS_OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdefineProps\s*\(\s*\{").unwrap());

static WITH_DEFAULTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwithDefaults\s*\(").unwrap());

static OPTIONS_PROPS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprops\s*:\s*\{").unwrap());

static TYPE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$]*").unwrap());

static PROP_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$-]*$").unwrap());

/// Extract and merge property declarations from both script regions.
pub fn extract_props(regions: &Regions<'_>) -> Vec<PropertyDeclaration> {
    let mut candidates = extract_inline_generic(regions.script_setup);
    candidates.extend(extract_object_literal(regions.script_setup));
    candidates.extend(extract_options_style(regions.script_plain));
    merge_props(candidates)
}

/// Idiom 1: `defineProps<...>()`.
pub fn extract_inline_generic(script: &str) -> Vec<PropertyDeclaration> {
    let mut props = Vec::new();

    for caps in DEFINE_PROPS_GENERIC_REGEX.captures_iter(script) {
        let param = caps.get(1).map_or("", |m| m.as_str());

        let body = match param.find('{') {
            Some(open) => braced_body(param, open),
            None => resolve_named_type(script, param.trim()),
        };

        if let Some(body) = body {
            props.extend(parse_type_entries(body));
        }
    }

    if !props.is_empty() {
        apply_with_defaults(script, &mut props);
    }

    props
}

/// Idiom 2: `defineProps({ ... })`.
pub fn extract_object_literal(script: &str) -> Vec<PropertyDeclaration> {
    DEFINE_PROPS_OBJECT_REGEX
        .find_iter(script)
        .filter_map(|m| braced_body(script, m.end() - 1))
        .flat_map(|body| parse_object_entries(body, PropOrigin::ObjectLiteral))
        .collect()
}

/// Idiom 3: a `props: { ... }` field, bounded by brace depth.
pub fn extract_options_style(script: &str) -> Vec<PropertyDeclaration> {
    OPTIONS_PROPS_REGEX
        .find(script)
        .and_then(|m| braced_body(script, m.end() - 1))
        .map(|body| parse_object_entries(body, PropOrigin::OptionsStyle))
        .unwrap_or_default()
}

/// Deduplicate by name.
///
/// A later declaration replaces an earlier one unless it has lower
/// precedence. The surviving entry keeps the position of the first one.
pub fn merge_props(candidates: Vec<PropertyDeclaration>) -> Vec<PropertyDeclaration> {
    let mut merged: Vec<PropertyDeclaration> = Vec::with_capacity(candidates.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for prop in candidates {
        match index.get(&prop.name) {
            Some(&i) => {
                if prop.origin.precedence() >= merged[i].origin.precedence() {
                    merged[i] = prop;
                }
            }
            None => {
                index.insert(prop.name.clone(), merged.len());
                merged.push(prop);
            }
        }
    }

    merged
}

/// Find the body of `interface Name { ... }` or `type Name = { ... }`.
fn resolve_named_type<'a>(script: &'a str, reference: &str) -> Option<&'a str> {
    let name = TYPE_NAME_REGEX.find(reference)?.as_str();
    let escaped = regex::escape(name);
    let pattern = format!(
        r"\binterface\s+{name}\b[^{{]*\{{|\btype\s+{name}\b[^=]*=\s*\{{",
        name = escaped
    );
    let definition = Regex::new(&pattern).ok()?.find(script)?;
    braced_body(script, definition.end() - 1)
}

/// Parse `name[?]: type` entries from a type literal body.
fn parse_type_entries(body: &str) -> Vec<PropertyDeclaration> {
    split_top_level(body, &[';', ',', '\n'], Angles::Brackets)
        .into_iter()
        .filter_map(|entry| {
            let (key, value) = split_key_value(entry)?;
            let key = key.strip_prefix("readonly ").unwrap_or(key).trim();
            let (name, optional) = match key.strip_suffix('?') {
                Some(name) => (name.trim_end(), true),
                None => (key, false),
            };
            let name = unquote(name);
            if !PROP_NAME_REGEX.is_match(name) {
                return None;
            }
            let ty = if value.is_empty() { UNKNOWN_TYPE } else { value };
            Some(
                PropertyDeclaration::new(name, ty, PropOrigin::InlineGenericLiteral)
                    .required(!optional),
            )
        })
        .collect()
}

/// Parse the entries of a props object (idioms 2 and 3).
fn parse_object_entries(body: &str, origin: PropOrigin) -> Vec<PropertyDeclaration> {
    split_top_level(body, &[','], Angles::Generic)
        .into_iter()
        .filter_map(|entry| {
            let (name, value) = split_key_value(entry)?;
            if !PROP_NAME_REGEX.is_match(name) {
                return None;
            }

            if value.starts_with('{') {
                let options = braced_body(value, 0).unwrap_or("");
                Some(parse_prop_options(name, options, origin))
            } else {
                let ty = if value.is_empty() { UNKNOWN_TYPE } else { value };
                Some(PropertyDeclaration::new(name, ty, origin))
            }
        })
        .collect()
}

/// Read `type`, `required` and `default` from a prop options object.
fn parse_prop_options(name: &str, options: &str, origin: PropOrigin) -> PropertyDeclaration {
    let mut ty = None;
    let mut required = false;
    let mut default = None;

    for field in split_top_level(options, &[','], Angles::Generic) {
        match split_key_value(field) {
            Some(("type", value)) => ty = Some(value),
            Some(("required", value)) => required = value == "true",
            Some(("default", value)) => default = Some(value.to_string()),
            Some(_) => {}
            // `default() { return ... }` method shorthand
            None => {
                if let Some(rest) = field.strip_prefix("default")
                    && rest.trim_start().starts_with('(')
                {
                    default = Some(rest.trim().to_string());
                }
            }
        }
    }

    PropertyDeclaration::new(name, ty.unwrap_or(UNKNOWN_TYPE), origin)
        .required(required)
        .with_default(default)
}

/// Fill defaults from `withDefaults(defineProps<...>(), { ... })`.
fn apply_with_defaults(script: &str, props: &mut [PropertyDeclaration]) {
    let Some(call) = WITH_DEFAULTS_REGEX.find(script) else {
        return;
    };
    let open = call.end() - 1;
    let Some(close) = find_matching_close(script, open) else {
        return;
    };

    let args = split_top_level(&script[open + 1..close], &[','], Angles::Brackets);
    let Some(defaults) = args.get(1).and_then(|arg| braced_body(arg, 0)) else {
        return;
    };

    for entry in split_top_level(defaults, &[','], Angles::Generic) {
        if let Some((key, value)) = split_key_value(entry)
            && let Some(prop) = props.iter_mut().find(|p| p.name == key)
        {
            prop.default = Some(value.to_string());
        }
    }
}
