use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BADGE_VUE, CARD_VUE, CliTest, stderr, stdout};

fn scanned_project() -> Result<CliTest> {
    let test = CliTest::with_file("src/components/Card.vue", CARD_VUE)?;
    test.write_file("src/components/Badge.vue", BADGE_VUE)?;
    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    Ok(test)
}

#[test]
fn test_show_single_component() -> Result<()> {
    let test = scanned_project()?;

    let output = test.show_command().arg("card").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.starts_with("Card (src/components/Card.vue)\n"));
    assert!(out.contains("  props (3):\n"));
    assert!(out.contains("    compact  boolean  optional\n"));
    assert!(out.contains("  emits (1): close\n"));
    assert!(out.contains("  slots (1): footer\n"));
    assert!(out.contains("cohesion 0.67 (2/3)"));
    assert!(out.contains("  diagnostics (3):\n"));
    assert!(out.contains("    [img-alt] <img> missing alt attribute\n"));
    assert!(!out.contains("matching components"));
    Ok(())
}

#[test]
fn test_show_without_query_lists_all() -> Result<()> {
    let test = scanned_project()?;

    let output = test.show_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.starts_with("2 matching components:\n"));
    assert!(out.contains("> 1. Badge  src/components/Badge.vue\n"));
    assert!(out.contains("  2. Card   src/components/Card.vue\n"));
    // First match is shown by default.
    assert!(out.contains("Badge (src/components/Badge.vue)\n"));
    assert!(out.contains("    tone  String  optional  default: 'neutral'\n"));
    Ok(())
}

#[test]
fn test_show_select() -> Result<()> {
    let test = scanned_project()?;

    let output = test.show_command().args(["--select", "2"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("  1. Badge  src/components/Badge.vue\n"));
    assert!(out.contains("> 2. Card   src/components/Card.vue\n"));
    assert!(out.contains("Card (src/components/Card.vue)\n"));
    Ok(())
}

#[test]
fn test_show_select_out_of_range() -> Result<()> {
    let test = scanned_project()?;

    let output = test.show_command().args(["--select", "5"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--select 5 is out of range (2 matching component(s))"));
    Ok(())
}

#[test]
fn test_show_no_match() -> Result<()> {
    let test = scanned_project()?;

    let output = test.show_command().arg("zzz").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("✘ No components match \"zzz\" in vuepact.manifest.json"));
    Ok(())
}

#[test]
fn test_show_missing_manifest() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .show_command()
        .args(["--manifest", "missing.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read manifest"));
    Ok(())
}

#[test]
fn test_show_uses_configured_manifest_path() -> Result<()> {
    let test = CliTest::with_file("src/Badge.vue", BADGE_VUE)?;
    test.write_file(".vuepactrc.json", r#"{ "manifestPath": "out/contracts.json" }"#)?;
    test.scan_command().output()?;

    let output = test.show_command().arg("badge").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Badge (src/Badge.vue)\n"));
    Ok(())
}
