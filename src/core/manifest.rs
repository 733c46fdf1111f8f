//! JSON manifest: every contract from one scan plus a version tag and timestamp.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::contract::ComponentContract;

pub const MANIFEST_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    /// RFC 3339 UTC timestamp of the scan.
    pub scanned_at: String,
    pub components: Vec<ComponentContract>,
}

impl Manifest {
    pub fn new(components: Vec<ComponentContract>) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            scanned_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            components,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Write the manifest, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    /// Components whose name or path contains `query`, case-insensitively.
    pub fn filter(&self, query: &str) -> Vec<&ComponentContract> {
        self.components
            .iter()
            .filter(|c| c.matches_query(query))
            .collect()
    }

    /// Exact path match first, then the first component with that name.
    pub fn find(&self, path_or_name: &str) -> Option<&ComponentContract> {
        self.components
            .iter()
            .find(|c| c.path == path_or_name)
            .or_else(|| self.components.iter().find(|c| c.name == path_or_name))
    }

    pub fn diagnostic_count(&self) -> usize {
        self.components.iter().map(|c| c.diagnostics.len()).sum()
    }
}
