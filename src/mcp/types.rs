use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::ComponentContract;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListComponentsParams {
    /// Path to a manifest written by `vuepact scan`
    pub manifest_path: String,
    /// Case-insensitive filter on component name or path
    #[serde(default)]
    pub query: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetComponentParams {
    /// Path to a manifest written by `vuepact scan`
    pub manifest_path: String,
    /// Component path as listed in the manifest, or a component name
    pub path: String,
}

// ============================================================
// Results
// ============================================================

/// Result of list_components
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListComponentsResult {
    pub scanned_at: String,
    /// Number of components matching the query, before pagination
    pub total_count: usize,
    pub items: Vec<ComponentSummary>,
    pub pagination: Pagination,
}

/// One row of list_components
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub path: String,
    pub name: String,
    pub prop_count: usize,
    pub event_count: usize,
    pub slot_count: usize,
    pub diagnostic_count: usize,
    pub cohesion: f64,
}

impl From<&ComponentContract> for ComponentSummary {
    fn from(c: &ComponentContract) -> Self {
        Self {
            path: c.path.clone(),
            name: c.name.clone(),
            prop_count: c.props.len(),
            event_count: c.events.len(),
            slot_count: c.slots.len(),
            diagnostic_count: c.diagnostics.len(),
            cohesion: c.metrics.cohesion,
        }
    }
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
