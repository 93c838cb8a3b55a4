//! Compilation errors.
//!
//! Every error aborts the whole compilation: a catalog either compiles
//! completely or produces no output at all.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The raw text is not a YAML mapping of entries to language mappings.
    #[error("unparsable definition: {0}")]
    UnparsableDefinition(String),

    /// No `default` field, or it is not a scalar language code.
    #[error("missing or malformed `default` language")]
    MissingDefaultLanguage,

    #[error("entry `{0}` has no translation in the default language")]
    MissingTranslationInDefaultLanguage(String),

    /// Malformed entry key, parameter list or conditional key.
    #[error("invalid key syntax `{key}`: {reason}")]
    InvalidKeySyntax { key: String, reason: String },

    #[error("entry `{key}` references undeclared parameter `{param}`")]
    UndeclaredParameterReference { key: String, param: String },

    #[error("invalid language code `{code}`: {reason}")]
    InvalidLanguageCode { code: String, reason: String },

    /// Two entries that would produce the same generated item.
    #[error("duplicate entry `{0}`")]
    DuplicateEntry(String),

    #[error("entry `{key}` has conditional variants for `{language}` but no plain `{language}` translation")]
    OrphanConditional { key: String, language: String },
}

impl CompileError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        CompileError::InvalidKeySyntax {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_language(code: &str, reason: impl Into<String>) -> Self {
        CompileError::InvalidLanguageCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending entry key, when the error is tied to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            CompileError::MissingTranslationInDefaultLanguage(key)
            | CompileError::DuplicateEntry(key)
            | CompileError::InvalidKeySyntax { key, .. }
            | CompileError::UndeclaredParameterReference { key, .. }
            | CompileError::OrphanConditional { key, .. } => Some(key),
            CompileError::UnparsableDefinition(_)
            | CompileError::MissingDefaultLanguage
            | CompileError::InvalidLanguageCode { .. } => None,
        }
    }

    /// Short kebab-case name of the error kind, used in CLI diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::UnparsableDefinition(_) => "unparsable-definition",
            CompileError::MissingDefaultLanguage => "missing-default-language",
            CompileError::MissingTranslationInDefaultLanguage(_) => {
                "missing-translation-in-default-language"
            }
            CompileError::InvalidKeySyntax { .. } => "invalid-key-syntax",
            CompileError::UndeclaredParameterReference { .. } => "undeclared-parameter-reference",
            CompileError::InvalidLanguageCode { .. } => "invalid-language-code",
            CompileError::DuplicateEntry(_) => "duplicate-entry",
            CompileError::OrphanConditional { .. } => "orphan-conditional",
        }
    }
}
