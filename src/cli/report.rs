//! Report formatting and printing utilities.
//!
//! Diagnostics are printed cargo-style to stdout, followed by a one-line
//! summary. Separate from the commands so locgen can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, GenerateOutput, GenerateSummary, InitSummary,
    PreviewSummary,
};
use super::diagnostic::{Diagnostic, Severity};
use crate::config::CONFIG_FILE_NAME;
use crate::preview::Branch;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    print_to(result, &mut stdout);
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    for diagnostic in &result.diagnostics {
        print_diagnostic(diagnostic, writer);
    }

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, writer),
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Preview(summary) => print_preview(summary, writer),
        CommandSummary::Init(summary) => print_init(summary),
        CommandSummary::Failed => {}
    }

    print_problems(result, writer);
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity = match diagnostic.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}{}: {}",
        severity,
        format!("[{}]", diagnostic.rule).dimmed().cyan(),
        diagnostic.message
    );

    match (&diagnostic.file, &diagnostic.key) {
        (Some(file), Some(key)) => {
            let _ = writeln!(writer, "  {} {} ({})", "-->".blue(), file, key);
        }
        (Some(file), None) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file);
        }
        (None, Some(key)) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), key);
        }
        (None, None) => {}
    }

    let _ = writeln!(writer); // Empty line between diagnostics
}

fn print_generate<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    match &summary.output {
        GenerateOutput::Stdout(source) => {
            let _ = write!(writer, "{}", source);
        }
        GenerateOutput::File { path, changed } => {
            let verb = if *changed { "Generated" } else { "Up to date" };
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "{} {} ({} {}, {} {})",
                    verb,
                    path.display(),
                    summary.entry_count,
                    plural(summary.entry_count, "entry", "entries"),
                    summary.language_count,
                    plural(summary.language_count, "language", "languages"),
                )
                .green()
            );
        }
    }
}

fn print_check<W: Write>(summary: &CheckSummary, writer: &mut W) {
    if summary.untranslated_count > 0 || summary.up_to_date == Some(false) {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} in {} {}",
            summary.entry_count,
            plural(summary.entry_count, "entry", "entries"),
            summary.language_count,
            plural(summary.language_count, "language", "languages"),
        )
        .green()
    );
}

fn print_preview<W: Write>(summary: &PreviewSummary, writer: &mut W) {
    let Some(preview) = &summary.preview else {
        return;
    };
    let _ = writeln!(writer, "{}", preview.text);

    let branch = match &preview.branch {
        Branch::Conditional(condition) => format!("when {}", condition),
        Branch::Base => "base".to_string(),
        Branch::Fallback => "fallback".to_string(),
    };
    let locale = if summary.locale.is_empty() {
        "<unset>"
    } else {
        summary.locale.as_str()
    };
    let _ = writeln!(
        writer,
        "  {} {} {} {} ({})",
        "=".blue(),
        "note:".bold(),
        locale,
        "->".dimmed(),
        format!("{}, {}", preview.language, branch).dimmed()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_problems<W: Write>(result: &CommandResult, writer: &mut W) {
    let total_errors = result.error_count();
    let total_warnings = result.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
