use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_translate_known_keys() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    assert_cmd_snapshot!(test.command().args(["system.dot", "foo", "parents.type.1"]));

    Ok(())
}

#[test]
fn test_translate_unknown_key_echoes_key() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    assert_cmd_snapshot!(test.command().args(["system.missing", "system"]));

    // Nothing is written without fill or log settings.
    assert_eq!(test.read_file("lang/en.json")?, crate::EN_DICTIONARY);
    Ok(())
}

#[test]
fn test_translate_with_delimiter_option() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    assert_cmd_snapshot!(test.command().args(["-D", "/", "system/dot", "system.dot"]));

    Ok(())
}

#[test]
fn test_translate_with_language_and_path_options() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/el.json", r#"{"system": {"dot": "τελεία"}}"#)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["--language", "el", "--path", "res", "system.dot"])
    );

    Ok(())
}

#[test]
fn test_translate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lexirc.json",
        r#"{ "delimiter": ":", "dictionaryRoot": "./i18n", "language": "de" }"#,
    )?;
    test.write_file("i18n/de.json", r#"{"menu": {"open": "Öffnen"}}"#)?;

    assert_cmd_snapshot!(test.command().args(["menu:open"]));

    Ok(())
}

#[test]
fn test_translate_key_named_like_subcommand() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en.json", r#"{"export": "Export", "init": "Start"}"#)?;

    assert_cmd_snapshot!(test.command().args(["--", "export", "init"]));

    Ok(())
}

#[test]
fn test_fill_unknown_registers_placeholder() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["--fill-unknown", "system.missing", "a.b.c", "system.dot"])
    );

    let saved: Value = serde_json::from_str(&test.read_file("lang/en.json")?)?;
    assert_eq!(saved["system"]["missing"], Value::Null);
    assert_eq!(saved["a"]["b"]["c"], Value::Null);
    assert_eq!(saved["system"]["dot"], "full stop");
    // Arrays come back as index-keyed objects.
    assert_eq!(saved["parents"]["type"]["2"], "third");
    Ok(())
}

#[test]
fn test_fill_unknown_creates_missing_language_file() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(
            test.command()
                .args(["-l", "fr", "--fill-unknown", "greeting.hello"])
        );
    });

    assert_eq!(
        test.read_file("lang/fr.json")?,
        "{\n  \"greeting\": {\n    \"hello\": null\n  }\n}\n"
    );
    Ok(())
}

#[test]
fn test_log_unknown_writes_deduplicated_list() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    for _ in 0..2 {
        let output = test
            .command()
            .args(["--log-unknown", "logs", "x.y", "foo", "x.y", "z"])
            .output()?;
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "x.y\nbar\nx.y\nz\n");
    }

    assert_eq!(test.read_file("logs/en_unknown.lst")?, "x.y\nz\n");
    Ok(())
}

#[test]
fn test_log_unknown_ignores_crlf_lines_from_other_tools() -> Result<()> {
    let test = CliTest::with_dictionary()?;
    test.write_file("logs/en_unknown.lst", "x.y\r\n")?;

    let output = test
        .command()
        .args(["--log-unknown", "logs", "x.y", "z"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("logs/en_unknown.lst")?, "x.y\r\nz\n");
    Ok(())
}

#[test]
fn test_warn_unknown_prints_diagnostic() -> Result<()> {
    let test = CliTest::with_dictionary()?;

    let output = test
        .command()
        .args(["--warn-unknown", "nope"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "nope\n");
    assert!(
        stderr(&output).contains(r#"Translation missing for "nope" in "en""#),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn test_missing_dictionary_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.command().args(["foo"]));
    });

    Ok(())
}

#[test]
fn test_corrupt_dictionary_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en.json", "{ not json")?;

    let output = test.command().args(["foo"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse dictionary"));
    // The corrupt file is left alone.
    assert_eq!(test.read_file("lang/en.json")?, "{ not json");
    Ok(())
}

#[test]
fn test_no_keys_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}
