use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_preview_resolves_locale_prefix() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .args(["house", "--locale", "de_CH"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Haus\n  = note: de_CH -> (de, base)\n");
    Ok(())
}

#[test]
fn test_preview_substitutes_arguments() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .args(["hello", "-l", "en", "--arg", "name=Peter"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Hello, Peter!\n"));
    Ok(())
}

#[test]
fn test_preview_conditional_and_fallback() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .args(["houses", "-l", "en_GB", "-a", "count=1"])
        .output()?;
    assert!(stdout(&output).starts_with("One house\n"));
    assert!(stdout(&output).contains(r#"(en, when count == "1")"#));

    let output = test
        .preview_command()
        .args(["house", "-l", "fr"])
        .output()?;
    assert!(stdout(&output).starts_with("House\n"));
    assert!(stdout(&output).contains("(fr, fallback)"));
    Ok(())
}

#[test]
fn test_preview_uses_system_locale() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .arg("house")
        .env("LANG", "de_DE.UTF-8")
        .output()?;
    assert!(stdout(&output).starts_with("Haus\n"));
    Ok(())
}

#[test]
fn test_preview_unknown_entry_is_error() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .args(["garage", "-l", "en"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error[unknown-entry]"));
    Ok(())
}

#[test]
fn test_preview_missing_argument_is_error() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .preview_command()
        .args(["hello", "-l", "en"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error[missing-argument]"));
    Ok(())
}
