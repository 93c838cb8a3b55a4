//! Diagnostics produced by CLI commands.
//!
//! Each diagnostic is self-contained: the reporter only needs the diagnostic
//! itself to print it.

use std::path::Path;

use crate::core::CompileError;
use crate::preview::PreviewError;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Short kebab-case rule name, e.g. `invalid-key-syntax`.
    pub rule: String,
    pub message: String,
    pub file: Option<String>,
    /// Entry key the diagnostic refers to.
    pub key: Option<String>,
}

impl Diagnostic {
    pub fn compile_error(file: &Path, error: &CompileError) -> Self {
        Self {
            severity: Severity::Error,
            rule: error.kind().to_string(),
            message: error.to_string(),
            file: Some(file.display().to_string()),
            key: error.key().map(str::to_string),
        }
    }

    pub fn preview_error(file: &Path, error: &PreviewError) -> Self {
        let rule = match error {
            PreviewError::UnknownEntry(_) => "unknown-entry",
            PreviewError::MissingArgument(_) => "missing-argument",
            PreviewError::UnsupportedCondition(_) => "unsupported-condition",
        };
        Self {
            severity: Severity::Error,
            rule: rule.to_string(),
            message: error.to_string(),
            file: Some(file.display().to_string()),
            key: None,
        }
    }

    pub fn skipped_condition(file: &Path, key: &str, condition: &str) -> Self {
        Self {
            severity: Severity::Warning,
            rule: "unsupported-condition".to_string(),
            message: format!("condition `{}` cannot be previewed, treated as false", condition),
            file: Some(file.display().to_string()),
            key: Some(key.to_string()),
        }
    }

    pub fn untranslated(file: &Path, key: &str, language: &str, default_language: &str) -> Self {
        Self {
            severity: Severity::Warning,
            rule: "untranslated".to_string(),
            message: format!(
                "no `{}` translation, falls back to `{}`",
                language, default_language
            ),
            file: Some(file.display().to_string()),
            key: Some(key.to_string()),
        }
    }

    pub fn stale_output(file: &Path) -> Self {
        Self {
            severity: Severity::Error,
            rule: "stale-output".to_string(),
            message: "generated code is out of date, run `locgen generate`".to_string(),
            file: Some(file.display().to_string()),
            key: None,
        }
    }

    pub fn missing_output(file: &Path) -> Self {
        Self {
            severity: Severity::Warning,
            rule: "missing-output".to_string(),
            message: "generated code does not exist yet".to_string(),
            file: Some(file.display().to_string()),
            key: None,
        }
    }
}
