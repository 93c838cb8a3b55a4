//! Evaluate a catalog entry the way the generated code would, without
//! compiling it.
//!
//! Conditions are arbitrary Rust expressions in generated code. Preview only
//! understands comparisons of parameters and string literals with `==` / `!=`,
//! joined by `&&` and `||` (`&&` binds tighter). Conditions outside that
//! subset are skipped and listed in [`Preview::skipped`].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::TranslationCatalog;

static COMPARISON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:([A-Za-z_][A-Za-z0-9_]*)|"((?:[^"\\]|\\.)*)")\s*(==|!=)\s*(?:([A-Za-z_][A-Za-z0-9_]*)|"((?:[^"\\]|\\.)*)")\s*$"#,
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("unknown entry `{0}`")]
    UnknownEntry(String),
    #[error("missing value for parameter `{0}`")]
    MissingArgument(String),
    #[error("condition `{0}` cannot be previewed")]
    UnsupportedCondition(String),
}

/// Which part of the translation produced the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// The conditional variant with this condition matched.
    Conditional(String),
    Base,
    /// The language is not translated; the default language's base text was used.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub language: String,
    pub text: String,
    pub branch: Branch,
    /// Conditions that could not be evaluated and were treated as false.
    pub skipped: Vec<String>,
}

/// Render entry `name` for `locale` with the given arguments.
pub fn preview(
    catalog: &TranslationCatalog,
    name: &str,
    locale: &str,
    args: &HashMap<String, String>,
) -> Result<Preview, PreviewError> {
    let entry = catalog
        .entry(name)
        .ok_or_else(|| PreviewError::UnknownEntry(name.to_string()))?;
    if let Some(missing) = entry.parameters().iter().find(|p| !args.contains_key(*p)) {
        return Err(PreviewError::MissingArgument(missing.clone()));
    }

    let language = catalog.resolve(locale);
    let spec = entry
        .translation(language)
        .ok_or_else(|| PreviewError::UnknownEntry(name.to_string()))?;

    let mut skipped = Vec::new();
    for conditional in &spec.conditionals {
        match evaluate(&conditional.condition, args) {
            Ok(true) => {
                return Ok(Preview {
                    language: language.to_string(),
                    text: conditional.template.render(args),
                    branch: Branch::Conditional(conditional.condition.clone()),
                    skipped,
                });
            }
            Ok(false) => {}
            Err(PreviewError::UnsupportedCondition(condition)) => skipped.push(condition),
            Err(err) => return Err(err),
        }
    }

    Ok(Preview {
        language: language.to_string(),
        text: spec.base.render(args),
        branch: if spec.is_fallback {
            Branch::Fallback
        } else {
            Branch::Base
        },
        skipped,
    })
}

/// Evaluate a condition against string arguments.
pub fn evaluate(condition: &str, args: &HashMap<String, String>) -> Result<bool, PreviewError> {
    let unsupported = || PreviewError::UnsupportedCondition(condition.to_string());

    let mut any = false;
    for alternative in split_outside_quotes(condition, "||") {
        let mut all = true;
        for comparison in split_outside_quotes(alternative, "&&") {
            let captures = COMPARISON_REGEX
                .captures(comparison)
                .ok_or_else(unsupported)?;
            let left = operand(captures.get(1), captures.get(2), args)?;
            let right = operand(captures.get(4), captures.get(5), args)?;
            let equal = left == right;
            all &= if &captures[3] == "==" { equal } else { !equal };
        }
        any |= all;
    }
    Ok(any)
}

fn operand(
    ident: Option<regex::Match<'_>>,
    literal: Option<regex::Match<'_>>,
    args: &HashMap<String, String>,
) -> Result<String, PreviewError> {
    match (ident, literal) {
        (Some(ident), _) => args
            .get(ident.as_str())
            .cloned()
            .ok_or_else(|| PreviewError::MissingArgument(ident.as_str().to_string())),
        (None, Some(literal)) => Ok(unescape(literal.as_str())),
        (None, None) => Ok(String::new()),
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Split on `separator` except inside double-quoted literals.
fn split_outside_quotes<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
        } else if bytes[i..].starts_with(separator.as_bytes()) {
            parts.push(&text[start..i]);
            i += separator.len();
            start = i;
            continue;
        }
        i += 1;
    }
    parts.push(&text[start..]);
    parts
}
