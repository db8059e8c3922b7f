use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".lexirc.json").exists());

    let content = test.read_file(".lexirc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["delimiter"], ".");
    assert_eq!(parsed["dictionaryRoot"], "./lang");
    assert_eq!(parsed["language"], "en");
    assert_eq!(parsed["fillUnknown"], false);
    assert_eq!(parsed["logUnknown"], false);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lexirc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    // The existing file is kept as it was.
    assert_eq!(test.read_file(".lexirc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("lang/en.json", r#"{"hello": "world"}"#)?;

    let output = test.command().arg("hello").output()?;
    assert!(
        output.status.success(),
        "Translate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "world\n");
    Ok(())
}
