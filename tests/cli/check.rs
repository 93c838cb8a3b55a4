use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_reports_untranslated_and_missing_output() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.check_command().output()?;
    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout.contains("warning[untranslated]: no `fr` translation, falls back to `en`"));
    assert!(stdout.contains("--> Localized.yml (house)"));
    assert!(stdout.contains("--> Localized.yml (hello(name))"));
    assert!(stdout.contains("warning[missing-output]"));
    assert!(stdout.contains("3 problems (0 errors, 3 warnings)"));
    Ok(())
}

#[test]
fn test_check_passes_after_generate() -> Result<()> {
    let test = CliTest::with_file("Localized.yml", "default: en\nhouse:\n  en: House\n  de: Haus\n")?;
    test.generate_command().output()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Checked 1 entry in 2 languages\n");
    Ok(())
}

#[test]
fn test_check_detects_stale_output() -> Result<()> {
    let test = CliTest::with_file("Localized.yml", "default: en\nhouse:\n  en: House\n")?;
    test.generate_command().output()?;
    test.write_file("Localized.yml", "default: en\nhouse:\n  en: Home\n")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("error[stale-output]"));
    Ok(())
}

#[test]
fn test_check_does_not_write() -> Result<()> {
    let test = CliTest::with_catalog()?;

    test.check_command().output()?;
    assert!(!test.root().join("src/localized.rs").exists());
    Ok(())
}

#[test]
fn test_check_reports_orphan_conditional() -> Result<()> {
    let test = CliTest::with_file(
        "Localized.yml",
        "default: en\nhouses(count):\n  en: (count) houses\n  'de(count == \"1\")': Ein Haus\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error[orphan-conditional]"));
    assert!(stdout(&output).contains("1 problem (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_matches_output_generated_with_embedded_source() -> Result<()> {
    let test = CliTest::with_file("Localized.yml", "default: en\nhouse:\n  en: House\n")?;
    let output = test.generate_command().arg("--embed-source").output()?;
    assert_eq!(output.status.code(), Some(0));

    let output = test.check_command().arg("--embed-source").output()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    assert!(!stdout(&output).contains("stale-output"));

    // Without the flag the embedded constant makes the file differ.
    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("error[stale-output]"));
    Ok(())
}

#[test]
fn test_check_honours_embed_source_from_config() -> Result<()> {
    let test = CliTest::with_file("Localized.yml", "default: en\nhouse:\n  en: House\n")?;
    test.write_file(".locgenrc.json", r#"{ "embedSource": true }"#)?;
    test.generate_command().output()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}
