//! Diagnostic rules.
//!
//! Markup rules are stateless: each one scans the template text for its own
//! tag, decides per occurrence, and returns fresh [`Diagnostic`] values.
//! No rule sees another rule's output, so the order they run in only
//! affects the order of the returned list.
//!
//! ## Module Structure
//!
//! - `helpers`: tag regex construction and attribute parsing
//! - `img_alt`: `<img>` without `alt`
//! - `button_type`: `<button>` without `type`
//! - `link_hash`: `<a href="#">` without `role`
//! - `input_label`: `<input>` without `aria-label` / `aria-labelledby`
//! - `prop_unused`: declared props never referenced in the template

pub mod button_type;
pub mod helpers;
pub mod img_alt;
pub mod input_label;
pub mod link_hash;
pub mod prop_unused;

use enum_dispatch::enum_dispatch;
use regex::Regex;

pub use button_type::ButtonType;
pub use img_alt::ImgAlt;
pub use input_label::InputLabel;
pub use link_hash::LinkHash;
pub use prop_unused::check_unused_props;

use crate::issues::{Diagnostic, RuleId};
use helpers::{Attribute, parse_attributes};

/// Static description of a markup rule.
#[derive(Debug)]
pub struct RuleMeta {
    pub id: RuleId,
    /// Element the rule inspects.
    pub tag: &'static str,
    /// Message attached to every finding.
    pub message: &'static str,
}

/// A lexical check over one kind of tag.
#[enum_dispatch]
pub trait MarkupRule {
    fn meta(&self) -> &'static RuleMeta;

    /// Regex matching the tags this rule inspects.
    fn tag_regex(&self) -> &'static Regex;

    /// Decide whether one tag occurrence violates the rule.
    fn is_violation(&self, attrs: &[Attribute<'_>]) -> bool;

    /// Run the rule over template markup.
    fn check(&self, markup: &str) -> Vec<Diagnostic> {
        let meta = self.meta();
        self.tag_regex()
            .find_iter(markup)
            .filter(|tag| self.is_violation(&parse_attributes(tag.as_str())))
            .map(|tag| Diagnostic::with_excerpt(meta.id, meta.message, tag.as_str()))
            .collect()
    }
}

#[enum_dispatch(MarkupRule)]
#[derive(Debug, Clone, Copy)]
pub enum AccessibilityRule {
    ImgAlt,
    ButtonType,
    LinkHash,
    InputLabel,
}

/// All markup rules, in report order.
pub fn markup_rules() -> [AccessibilityRule; 4] {
    [
        ImgAlt.into(),
        ButtonType.into(),
        LinkHash.into(),
        InputLabel.into(),
    ]
}

/// Run every markup rule and concatenate their findings.
pub fn check_markup(markup: &str) -> Vec<Diagnostic> {
    if markup.is_empty() {
        return Vec::new();
    }
    markup_rules()
        .iter()
        .flat_map(|rule| rule.check(markup))
        .collect()
}
