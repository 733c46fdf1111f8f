use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BADGE_VUE, CARD_VUE, CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("src/components/Card.vue", CARD_VUE)?;
    test.write_file("src/components/Badge.vue", BADGE_VUE)?;
    test.write_file("src/main.ts", "createApp(App).mount('#app')")?;
    Ok(test)
}

#[test]
fn test_scan_reports_diagnostics_and_writes_manifest() -> Result<()> {
    let test = project()?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("warning: <img> missing alt attribute  img-alt\n  --> src/components/Card.vue\n   = note: <img :src=\"image\">\n"));
    assert!(out.contains("warning: <button> missing type attribute  button-type"));
    assert!(out.contains(
        "warning: Prop declared but not referenced in template: compact  prop-unused\n  --> src/components/Card.vue\n"
    ));
    assert!(out.contains("✘ 3 diagnostics in 1 of 2 components\n"));
    assert!(out.contains("Wrote manifest: vuepact.manifest.json\n"));
    assert!(!out.contains("Wrote report:"));

    assert!(test.root().join("vuepact.manifest.json").exists());
    Ok(())
}

#[test]
fn test_scan_manifest_content() -> Result<()> {
    let test = project()?;
    test.scan_command().output()?;

    let manifest = test.read_json("vuepact.manifest.json")?;
    assert_eq!(manifest["version"], "0.1.0");
    assert!(manifest["scannedAt"].is_string());

    let components = manifest["components"].as_array().unwrap();
    assert_eq!(components.len(), 2);

    let badge = &components[0];
    assert_eq!(badge["path"], "src/components/Badge.vue");
    assert_eq!(badge["name"], "Badge");
    assert_eq!(badge["props"][0]["name"], "tone");
    assert_eq!(badge["props"][0]["type"], "String");
    assert_eq!(badge["props"][0]["default"], "'neutral'");
    assert_eq!(badge["props"][0]["origin"], "options-style");
    assert_eq!(badge["slots"], serde_json::json!(["default"]));
    assert_eq!(badge["metrics"]["cohesion"], 1.0);
    assert_eq!(badge["diagnostics"], serde_json::json!([]));

    let card = &components[1];
    assert_eq!(card["name"], "Card");
    assert_eq!(card["props"].as_array().unwrap().len(), 3);
    assert_eq!(card["props"][2]["name"], "compact");
    assert_eq!(card["props"][2]["required"], false);
    assert_eq!(card["events"], serde_json::json!(["close"]));
    assert_eq!(card["slots"], serde_json::json!(["footer"]));
    assert_eq!(card["metrics"]["propsDeclared"], 3);
    assert_eq!(card["metrics"]["propsUsed"], 2);
    assert_eq!(card["metrics"]["cohesion"], 0.67);
    assert_eq!(card["diagnostics"][0]["rule"], "img-alt");
    assert!(card["diagnostics"][2].get("excerpt").is_none());
    Ok(())
}

#[test]
fn test_scan_strict_fails_on_diagnostics() -> Result<()> {
    let test = project()?;

    let output = test.scan_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));

    // Manifest is still written.
    assert!(test.root().join("vuepact.manifest.json").exists());
    Ok(())
}

#[test]
fn test_scan_strict_passes_when_clean() -> Result<()> {
    let test = CliTest::with_file("src/Badge.vue", BADGE_VUE)?;

    let output = test.scan_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ Scanned 1 component - no diagnostics found\n"));
    Ok(())
}

#[test]
fn test_scan_writes_markdown_report() -> Result<()> {
    let test = project()?;

    let output = test
        .scan_command()
        .args(["--out", "build/contracts.json", "--report", "docs/components.md"])
        .output()?;
    let out = stdout(&output);

    assert!(out.contains("Wrote manifest: build/contracts.json\n"));
    assert!(out.contains("Wrote report: docs/components.md\n"));
    assert!(!test.root().join("vuepact.manifest.json").exists());

    let report = test.read_file("docs/components.md")?;
    assert!(report.starts_with("# Vue Pact Report\n"));
    assert!(report.contains("## Card (`src/components/Card.vue`)"));
    assert!(report.contains("**Props (3)** | **Emits (1)** | **Slots (1)** | **Cohesion 0.67**"));
    assert!(report.contains("| compact | boolean | no |  |"));
    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".vuepactrc.json",
        r#"{
  "ignores": ["**/Card.vue"],
  "manifestPath": "out/vuepact.json",
  "reportPath": "out/vuepact.md"
}"#,
    )?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let manifest = test.read_json("out/vuepact.json")?;
    let components = manifest["components"].as_array().unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0]["name"], "Badge");
    assert!(test.root().join("out/vuepact.md").exists());
    Ok(())
}

#[test]
fn test_scan_subdirectory_argument() -> Result<()> {
    let test = project()?;
    test.write_file("legacy/Old.vue", "<template><img src=\"x\"></template>")?;

    let output = test.scan_command().arg("src").output()?;
    assert_eq!(output.status.code(), Some(0));

    // Paths are relative to the scanned directory; config paths resolve from it.
    let manifest = test.read_json("src/vuepact.manifest.json")?;
    let paths: Vec<_> = manifest["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["components/Badge.vue", "components/Card.vue"]);
    Ok(())
}

#[test]
fn test_scan_skips_unreadable_files() -> Result<()> {
    let test = project()?;
    fs::write(test.root().join("src/Broken.vue"), [0xc3, 0x28, 0xff])?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: 1 file(s) could not be read (use -v for details)"));

    let verbose = test.scan_command().arg("-v").output()?;
    assert!(stderr(&verbose).contains("warning: skipped src/Broken.vue - Failed to read file"));

    let manifest = test.read_json("vuepact.manifest.json")?;
    assert_eq!(manifest["components"].as_array().unwrap().len(), 2);
    Ok(())
}

#[test]
fn test_scan_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ Scanned 0 components - no diagnostics found"));

    let manifest = test.read_json("vuepact.manifest.json")?;
    assert_eq!(manifest["components"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_scan_missing_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("does-not-exist").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Scan root is not a directory: does-not-exist"));
    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = project()?;
    test.write_file(".vuepactrc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}
