use std::path::PathBuf;

use super::super::diagnostic::{Diagnostic, Severity};
use super::super::exit_status::ExitStatus;
use crate::preview::Preview;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Preview(PreviewSummary),
    Init(InitSummary),
    /// The catalog could not be compiled; details are in the diagnostics.
    Failed,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub entry_count: usize,
    pub language_count: usize,
    pub output: GenerateOutput,
}

#[derive(Debug)]
pub enum GenerateOutput {
    /// Written to (or already up to date at) this path.
    File { path: PathBuf, changed: bool },
    /// Print this source to stdout.
    Stdout(String),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub entry_count: usize,
    pub language_count: usize,
    pub untranslated_count: usize,
    /// `None` when the output file does not exist.
    pub up_to_date: Option<bool>,
}

#[derive(Debug)]
pub struct PreviewSummary {
    pub key: String,
    pub locale: String,
    pub preview: Option<Preview>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running locgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub diagnostics: Vec<Diagnostic>,
    pub status: ExitStatus,
}

impl CommandResult {
    /// Build a result whose status is derived from `base` and the diagnostics:
    /// any error diagnostic raises the status to at least `error_status`.
    pub fn finish(
        summary: CommandSummary,
        mut diagnostics: Vec<Diagnostic>,
        base: ExitStatus,
        error_status: ExitStatus,
    ) -> Self {
        diagnostics.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| a.key.cmp(&b.key))
                .then_with(|| a.rule.cmp(&b.rule))
        });
        let has_error = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let status = if has_error {
            base.max(error_status)
        } else {
            base
        };
        Self {
            summary,
            diagnostics,
            status,
        }
    }

    pub fn failed(diagnostic: Diagnostic) -> Self {
        Self::finish(
            CommandSummary::Failed,
            vec![diagnostic],
            ExitStatus::Success,
            ExitStatus::Error,
        )
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
