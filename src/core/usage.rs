//! Cross-referencing of declared props against template markup, plus the
//! size metrics reported for each component.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::contract::{PropertyDeclaration, UsageMetrics};
use crate::core::segment::Regions;
use crate::utils::{is_identifier_char, line_count, round2};

static BRANCH_DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v-if|v-else-if|v-for").unwrap());

/// Declared props partitioned by whether the template references them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropUsage {
    pub used: Vec<String>,
    pub unused: Vec<String>,
}

impl PropUsage {
    pub fn declared(&self) -> usize {
        self.used.len() + self.unused.len()
    }

    /// Used / declared, 1.0 when nothing is declared.
    ///
    /// Rounding never reaches 1.0 while a prop is unused, nor 0.0 while one
    /// is used.
    pub fn cohesion(&self) -> f64 {
        let declared = self.declared();
        let used = self.used.len();
        if declared == 0 || used == declared {
            return 1.0;
        }
        if used == 0 {
            return 0.0;
        }
        round2(used as f64 / declared as f64).clamp(0.01, 0.99)
    }
}

/// Partition `props` by whole-token occurrence in `markup`.
pub fn analyze_prop_usage(markup: &str, props: &[PropertyDeclaration]) -> PropUsage {
    let mut usage = PropUsage::default();
    for prop in props {
        if is_referenced(markup, &prop.name) {
            usage.used.push(prop.name.clone());
        } else {
            usage.unused.push(prop.name.clone());
        }
    }
    usage
}

/// True if `name` occurs in `text` bounded by non-identifier characters.
///
/// ```
/// use vuepact::core::usage::is_referenced;
///
/// assert!(is_referenced("{{ count }}", "count"));
/// assert!(is_referenced("count", "count"));
/// assert!(!is_referenced("{{ counter }}", "count"));
/// assert!(!is_referenced("{{ recount }}", "count"));
/// ```
pub fn is_referenced(text: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    text.match_indices(name).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + name.len()..].chars().next();
        !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
    })
}

pub fn compute_metrics(regions: &Regions<'_>, usage: &PropUsage) -> UsageMetrics {
    UsageMetrics {
        template_lines: line_count(regions.markup),
        script_lines: regions.scripts().iter().map(|s| line_count(s)).sum(),
        branches: BRANCH_DIRECTIVE_REGEX.find_iter(regions.markup).count(),
        props_declared: usage.declared(),
        props_used: usage.used.len(),
        cohesion: usage.cohesion(),
    }
}
