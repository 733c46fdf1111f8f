use std::{
    fs,
    path::PathBuf,
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;
use vuepact::core::{Manifest, analyze_component};

mod tools;

const MANIFEST_FILE: &str = "vuepact.manifest.json";

/// Test fixture for MCP integration tests
///
/// Holds a temporary directory with a manifest built from in-memory components.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Analyze `(path, source)` pairs and write the resulting manifest.
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_components(&[
    ///     ("src/Card.vue", "<template><img></template>"),
    /// ])?;
    /// ```
    pub fn with_components(components: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        let mut contracts: Vec<_> = components
            .iter()
            .map(|(path, source)| analyze_component(source, path))
            .collect();
        contracts.sort_by(|a, b| a.path.cmp(&b.path));
        Manifest::new(contracts).write(&fixture.manifest_file())?;
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }

    /// Manifest path as a string (for MCP parameters)
    pub fn manifest_path(&self) -> String {
        self.manifest_file().to_string_lossy().to_string()
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Three small components, one with diagnostics.
pub fn fixture_design_system() -> Result<McpTestFixture> {
    McpTestFixture::with_components(&[
        (
            "src/components/Card.vue",
            r#"<template>
  <article>
    <img :src="image">
    <h2>{{ title }}</h2>
  </article>
</template>
<script setup lang="ts">
defineProps<{ title: string; image: string; compact?: boolean }>()
defineEmits(['close'])
</script>"#,
        ),
        (
            "src/components/Badge.vue",
            r#"<template><span :class="tone"><slot /></span></template>
<script>
export default { props: { tone: { type: String, default: 'neutral' } } }
</script>"#,
        ),
        (
            "src/layout/CardGrid.vue",
            r#"<template><div><slot name="item" /></div></template>"#,
        ),
    ])
}

/// `count` components named `Item00.vue`, `Item01.vue`, ...
pub fn fixture_many(count: usize) -> Result<McpTestFixture> {
    let files: Vec<(String, &str)> = (0..count)
        .map(|i| (format!("src/Item{:02}.vue", i), "<template><p>item</p></template>"))
        .collect();
    let refs: Vec<(&str, &str)> = files.iter().map(|(p, s)| (p.as_str(), *s)).collect();
    McpTestFixture::with_components(&refs)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a list result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
