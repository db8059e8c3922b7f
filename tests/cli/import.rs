use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_import_replaces_dictionary() -> Result<()> {
    let test = CliTest::with_dictionary()?;
    test.write_file(
        "flat.json",
        r#"{"menu.open": "Open", "menu.close": "Close", "title": "Lexi"}"#,
    )?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.command().args(["import", "flat.json"]));
    });

    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n  \"menu\": {\n    \"open\": \"Open\",\n    \"close\": \"Close\"\n  },\n  \"title\": \"Lexi\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_import_merge_keeps_existing_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en.json", r#"{"system": {"dot": "full stop"}}"#)?;
    test.write_file("flat.json", r#"{"system.comma": "pause"}"#)?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(
            test.command()
                .args(["import", "--merge", "flat.json"])
        );
    });

    let saved: Value = serde_json::from_str(&test.read_file("lang/en.json")?)?;
    assert_eq!(saved, json!({"system": {"dot": "full stop", "comma": "pause"}}));
    Ok(())
}

#[test]
fn test_import_then_export_round_trips() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    let exported = test.command().arg("export").output()?;
    assert!(exported.status.success());
    test.write_file("flat.json", &stdout(&exported))?;

    let imported = test
        .command()
        .args(["import", "-l", "copy", "flat.json"])
        .output()?;
    assert!(imported.status.success(), "stderr: {}", stderr(&imported));

    let original: Value = serde_json::from_str(crate::EN_DICTIONARY)?;
    let copy: Value = serde_json::from_str(&test.read_file("lang/copy.json")?)?;
    assert_eq!(copy["system"], original["system"]);
    assert_eq!(copy["parents"]["type"], json!({"0": "first", "1": "second", "2": "third"}));
    Ok(())
}

#[test]
fn test_import_rejects_empty_segment() -> Result<()> {
    let test = CliTest::with_dictionary()?;
    test.write_file("flat.json", r#"{"ok": "fine", "bad..key": "x"}"#)?;

    assert_cmd_snapshot!(test.command().args(["import", "flat.json"]));

    assert_eq!(test.read_file("lang/en.json")?, crate::EN_DICTIONARY);
    Ok(())
}

#[test]
fn test_import_rejects_non_object() -> Result<()> {
    let test = CliTest::with_dictionary()?;
    test.write_file("flat.json", r#"["a", "b"]"#)?;

    assert_cmd_snapshot!(test.command().args(["import", "flat.json"]));

    assert_eq!(test.read_file("lang/en.json")?, crate::EN_DICTIONARY);
    Ok(())
}
