//! button-type
//!
//! A `<button>` without `type` submits its enclosing form.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{Attribute, has_attribute, tag_regex};
use super::{MarkupRule, RuleMeta};
use crate::issues::RuleId;

static META: RuleMeta = RuleMeta {
    id: RuleId::ButtonType,
    tag: "button",
    message: "<button> missing type attribute",
};

static BUTTON_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| tag_regex(META.tag));

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonType;

impl MarkupRule for ButtonType {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn tag_regex(&self) -> &'static Regex {
        &BUTTON_TAG_REGEX
    }

    fn is_violation(&self, attrs: &[Attribute<'_>]) -> bool {
        !has_attribute(attrs, "type")
    }
}
