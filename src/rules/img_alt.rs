//! img-alt
//!
//! Images must carry an `alt` attribute. `alt=""` marks a decorative image
//! and is accepted; a bound `:alt` is accepted as well.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{Attribute, has_attribute, tag_regex};
use super::{MarkupRule, RuleMeta};
use crate::issues::RuleId;

static META: RuleMeta = RuleMeta {
    id: RuleId::ImgAlt,
    tag: "img",
    message: "<img> missing alt attribute",
};

static IMG_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| tag_regex(META.tag));

#[derive(Debug, Clone, Copy, Default)]
pub struct ImgAlt;

impl MarkupRule for ImgAlt {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn tag_regex(&self) -> &'static Regex {
        &IMG_TAG_REGEX
    }

    fn is_violation(&self, attrs: &[Attribute<'_>]) -> bool {
        !has_attribute(attrs, "alt")
    }
}
