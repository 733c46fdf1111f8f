//! input-label
//!
//! Inputs need an accessible name. Only `aria-label` and `aria-labelledby`
//! on the tag itself are recognized; `<label for="...">` association is
//! structural and not resolved here, so this rule is a heuristic.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{Attribute, has_attribute, tag_regex};
use super::{MarkupRule, RuleMeta};
use crate::issues::RuleId;

static META: RuleMeta = RuleMeta {
    id: RuleId::InputLabel,
    tag: "input",
    message: "<input> missing aria-label/aria-labelledby (heuristic)",
};

static INPUT_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| tag_regex(META.tag));

#[derive(Debug, Clone, Copy, Default)]
pub struct InputLabel;

impl MarkupRule for InputLabel {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn tag_regex(&self) -> &'static Regex {
        &INPUT_TAG_REGEX
    }

    fn is_violation(&self, attrs: &[Attribute<'_>]) -> bool {
        !has_attribute(attrs, "aria-label") && !has_attribute(attrs, "aria-labelledby")
    }
}
