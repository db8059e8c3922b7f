use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_export_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "lang/en.json",
        r#"{"foo": "bar", "system": {"dot": "full stop", "pending": null}}"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("export"));

    Ok(())
}

#[test]
fn test_export_lines_with_delimiter() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["export", "--format", "lines", "-D", "/"])
    );

    Ok(())
}

#[test]
fn test_export_leaves_dictionary_untouched() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    let output = test.command().args(["export", "--format", "lines"]).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("lang/en.json")?, crate::EN_DICTIONARY);
    Ok(())
}

#[test]
fn test_export_missing_language_fails() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.command().args(["export", "-l", "fr"]));
    });

    assert!(!test.root().join("lang/fr.json").exists());
    Ok(())
}
