//! Component contract data model.
//!
//! Everything the engine produces for one `.vue` file lives here. The types
//! serialize with camelCase field names; the manifest writer and the viewer
//! both depend on this shape, so renaming a field is a breaking change.

use serde::{Deserialize, Serialize};

use crate::issues::Diagnostic;

/// Type reported when a declaration does not name one.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Slot name used when a `<slot>` or `v-slot` carries no explicit name.
pub const DEFAULT_SLOT: &str = "default";

/// Declaration idiom a property was extracted from.
///
/// Inline-generic and object-literal declarations outrank options-style ones
/// when the same name is declared more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropOrigin {
    /// `defineProps<{ ... }>()` or `defineProps<Named>()`.
    InlineGenericLiteral,
    /// `defineProps({ ... })`.
    ObjectLiteral,
    /// `export default { props: { ... } }`.
    OptionsStyle,
}

impl PropOrigin {
    /// Merge rank; higher wins on a name collision.
    pub fn precedence(self) -> u8 {
        match self {
            PropOrigin::InlineGenericLiteral | PropOrigin::ObjectLiteral => 1,
            PropOrigin::OptionsStyle => 0,
        }
    }
}

impl std::fmt::Display for PropOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropOrigin::InlineGenericLiteral => write!(f, "inline-generic-literal"),
            PropOrigin::ObjectLiteral => write!(f, "object-literal"),
            PropOrigin::OptionsStyle => write!(f, "options-style"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub origin: PropOrigin,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, origin: PropOrigin) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            default: None,
            origin,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

/// Size and usage figures for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub template_lines: usize,
    pub script_lines: usize,
    /// Number of `v-if`, `v-else-if` and `v-for` directives in the template.
    pub branches: usize,
    pub props_declared: usize,
    pub props_used: usize,
    /// `props_used / props_declared`, rounded to two decimals. 1.0 when no props are declared.
    pub cohesion: f64,
}

/// Structural summary of one component file.
///
/// Built once by [`crate::core::analyze_component`] and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContract {
    /// Display path the file was analyzed under.
    pub path: String,
    /// File stem with the `.vue` suffix removed.
    pub name: String,
    pub props: Vec<PropertyDeclaration>,
    pub events: Vec<String>,
    pub slots: Vec<String>,
    pub metrics: UsageMetrics,
    pub diagnostics: Vec<Diagnostic>,
}

impl ComponentContract {
    /// Case-insensitive substring match against name or path.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.path.to_lowercase().contains(&needle)
    }
}

/// Infer a component name from its display path.
///
/// ```
/// use vuepact::core::component_name;
///
/// assert_eq!(component_name("src/components/UserCard.vue"), "UserCard");
/// assert_eq!(component_name("Button.VUE"), "Button.VUE");
/// assert_eq!(component_name("README"), "README");
/// ```
pub fn component_name(path: &str) -> String {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    base.strip_suffix(".vue").unwrap_or(base).to_string()
}
