//! Translation text parsing.
//!
//! A translation like `Hello, (name)!` is split into literal and placeholder
//! segments once, at parse time. Generators and the preview renderer work on
//! the segments, never on the raw text, so a parameter whose name is a prefix
//! of another (`name`, `name1`) cannot be substituted twice.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::CompileError;
use crate::core::key::split_parenthesized;

static PARENTHESIZED_IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z_][A-Za-z0-9_]*)\)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Substitution point for the named parameter.
    Placeholder(String),
}

/// Translation text with its substitution points resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTemplate {
    segments: Vec<Segment>,
}

impl TranslationTemplate {
    /// Split `text` into segments, turning every `(<param>)` of a declared
    /// parameter into a placeholder. Anything else stays literal.
    pub fn parse(text: &str, parameters: &[String]) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('(') {
            literal.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let matched = parameters.iter().find(|param| {
                after_open
                    .strip_prefix(param.as_str())
                    .is_some_and(|tail| tail.starts_with(')'))
            });
            match matched {
                Some(param) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(param.clone()));
                    rest = &after_open[param.len() + 1..];
                }
                None => {
                    literal.push('(');
                    rest = after_open;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    /// Like [`TranslationTemplate::parse`], but fails when the text contains a
    /// parenthesized bare identifier that is not one of `parameters`.
    pub fn parse_strict(key: &str, text: &str, parameters: &[String]) -> Result<Self, CompileError> {
        if let Some(param) = undeclared_references(text, parameters).into_iter().next() {
            return Err(CompileError::UndeclaredParameterReference {
                key: key.to_string(),
                param,
            });
        }
        Ok(Self::parse(text, parameters))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Substitute runtime values. Placeholders without a value render empty.
    pub fn render(&self, args: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = args.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }

    /// The template as a `format!` string with inline named arguments:
    /// literal braces are doubled and placeholders become `{name}`.
    pub fn format_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    out.push_str(&text.replace('{', "{{").replace('}', "}}"));
                }
                Segment::Placeholder(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }
}

impl fmt::Display for TranslationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{}", text)?,
                Segment::Placeholder(name) => write!(f, "({})", name)?,
            }
        }
        Ok(())
    }
}

/// Parenthesized bare identifiers in `text` that are not declared parameters.
pub fn undeclared_references(text: &str, parameters: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for captures in PARENTHESIZED_IDENT_REGEX.captures_iter(text) {
        let name = &captures[1];
        if !parameters.iter().any(|p| p == name) && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
    }
    found
}

/// A key inside an entry's translation map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageKey {
    /// `en`
    Plain(String),
    /// `en(count == "1")`: the condition is kept verbatim.
    Conditional { language: String, condition: String },
}

impl LanguageKey {
    /// Parse a translation-map key. `entry_key` is only used for diagnostics.
    pub fn parse(entry_key: &str, raw: &str) -> Result<Self, CompileError> {
        let invalid = |reason: &str| {
            CompileError::invalid_key(entry_key, format!("language key `{}`: {}", raw, reason))
        };

        match split_parenthesized(raw).map_err(invalid)? {
            None => Ok(LanguageKey::Plain(raw.to_string())),
            Some((language, condition)) => {
                let condition = condition.trim();
                if condition.is_empty() {
                    return Err(invalid("empty condition"));
                }
                Ok(LanguageKey::Conditional {
                    language: language.to_string(),
                    condition: condition.to_string(),
                })
            }
        }
    }

    pub fn language(&self) -> &str {
        match self {
            LanguageKey::Plain(language) => language,
            LanguageKey::Conditional { language, .. } => language,
        }
    }
}
