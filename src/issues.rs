//! Finding types produced during a scan.
//!
//! - [`Diagnostic`]: advisory finding attached to a component contract
//!   (accessibility rules and unused props). Part of the serialized manifest.
//! - [`SkippedFile`]: a file the batch could not read; reported by the CLI,
//!   never part of a contract.

use serde::{Deserialize, Serialize};

use crate::utils::truncate_excerpt;

/// Maximum number of characters kept in a diagnostic excerpt.
pub const EXCERPT_MAX_CHARS: usize = 80;

/// Rule identifier for each diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "img-alt")]
    ImgAlt,
    #[serde(rename = "button-type")]
    ButtonType,
    #[serde(rename = "link-hash")]
    LinkHash,
    #[serde(rename = "input-label")]
    InputLabel,
    #[serde(rename = "prop-unused")]
    PropUnused,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::ImgAlt => "img-alt",
            RuleId::ButtonType => "button-type",
            RuleId::LinkHash => "link-hash",
            RuleId::InputLabel => "input-label",
            RuleId::PropUnused => "prop-unused",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory finding. Never blocks contract assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub rule: RuleId,
    pub message: String,
    /// Offending tag, truncated to [`EXCERPT_MAX_CHARS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl Diagnostic {
    /// Finding anchored to a piece of markup.
    pub fn with_excerpt(rule: RuleId, message: impl Into<String>, source: &str) -> Self {
        Self {
            rule,
            message: message.into(),
            excerpt: Some(truncate_excerpt(source, EXCERPT_MAX_CHARS)),
        }
    }

    pub fn prop_unused(name: &str) -> Self {
        Self {
            rule: RuleId::PropUnused,
            message: format!("Prop declared but not referenced in template: {}", name),
            excerpt: None,
        }
    }
}

/// Why a file was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_path: String,
    pub error: String,
}

impl std::fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.file_path, self.error)
    }
}
