use anyhow::Result;

use crate::{CATALOG, CliTest, stderr, stdout};

#[test]
fn test_generate_writes_default_output() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated"));
    assert!(stdout(&output).contains("(3 entries, 3 languages)"));

    let generated = test.read_file("src/localized.rs")?;
    assert!(generated.starts_with("// This file is @generated by locgen. DO NOT EDIT.\n"));
    assert!(generated.contains("pub enum Localized {"));
    assert!(generated.contains("Hello { name: String },"));
    assert!(generated.contains("pub fn fr(&self) -> String {"));
    assert!(generated.contains("pub mod loc {"));
    assert!(generated.contains("pub fn hello(name: &str) -> String {"));
    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_catalog()?;

    test.generate_command().output()?;
    let first = test.read_file("src/localized.rs")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Up to date"));
    assert_eq!(test.read_file("src/localized.rs")?, first);
    Ok(())
}

#[test]
fn test_generate_to_stdout_writes_nothing() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().arg("--stdout").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("// This file is @generated by locgen."));
    assert!(!test.root().join("src/localized.rs").exists());
    Ok(())
}

#[test]
fn test_generate_with_flags_and_config() -> Result<()> {
    let test = CliTest::with_file("i18n/strings.yml", CATALOG)?;
    test.write_file(
        ".locgenrc.json",
        r#"{ "input": "i18n/strings.yml", "output": "gen/strings.rs", "enumName": "Strings", "facadeName": "tr" }"#,
    )?;

    let output = test.generate_command().arg("--embed-source").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let generated = test.read_file("gen/strings.rs")?;
    assert!(generated.contains("pub enum Strings {"));
    assert!(generated.contains("pub mod tr {"));
    assert!(generated.contains("pub const SOURCE: &'static str = "));
    Ok(())
}

#[test]
fn test_generate_from_subdirectory_finds_config() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".locgenrc.json", r#"{ "output": "out.rs" }"#)?;
    test.write_file("nested/deeper/.keep", "")?;

    let output = test
        .generate_command()
        .args(["--path", "nested/deeper"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("out.rs").exists());
    Ok(())
}

#[test]
fn test_generate_reports_compile_error() -> Result<()> {
    let test = CliTest::with_file("Localized.yml", "house:\n  en: House\n")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stdout = stdout(&output);
    assert!(stdout.contains("error[missing-default-language]"), "{}", stdout);
    assert!(stdout.contains("--> Localized.yml"), "{}", stdout);
    assert!(!test.root().join("src/localized.rs").exists());
    Ok(())
}

#[test]
fn test_generate_strict_rejects_undeclared_reference() -> Result<()> {
    let test = CliTest::with_file(
        "Localized.yml",
        "default: en\ngreeting(name):\n  en: Hi (nmae)\n",
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "lenient by default");

    let output = test.generate_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error[undeclared-parameter-reference]"));
    Ok(())
}

#[test]
fn test_generate_missing_catalog_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read translation catalog"));
    Ok(())
}

#[test]
fn test_generate_rejects_colliding_language_codes() -> Result<()> {
    let test = CliTest::with_file(
        "Localized.yml",
        "default: en\nhouse:\n  en: House\n  zh-Hans: A\n  zh_Hans: B\n",
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("error[invalid-language-code]"));
    assert!(!test.root().join("src/localized.rs").exists());
    Ok(())
}
