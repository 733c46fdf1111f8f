//! link-hash
//!
//! `<a href="#">` used as a click target should declare what it is with
//! `role`. Only the literal static value `#` is checked.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{Attribute, has_attribute, static_value, tag_regex};
use super::{MarkupRule, RuleMeta};
use crate::issues::RuleId;

static META: RuleMeta = RuleMeta {
    id: RuleId::LinkHash,
    tag: "a",
    message: "<a href=\"#\"> without role is an anti-pattern",
};

static ANCHOR_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| tag_regex(META.tag));

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkHash;

impl MarkupRule for LinkHash {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn tag_regex(&self) -> &'static Regex {
        &ANCHOR_TAG_REGEX
    }

    fn is_violation(&self, attrs: &[Attribute<'_>]) -> bool {
        static_value(attrs, "href") == Some("#") && !has_attribute(attrs, "role")
    }
}
