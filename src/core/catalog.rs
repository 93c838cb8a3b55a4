//! Catalog parsing: raw YAML text to a validated [`TranslationCatalog`].
//!
//! # Ordering
//!
//! Entries keep their document order. Languages are ordered by first
//! appearance as a plain key, scanning entries top to bottom. Conditional
//! variants keep their document order within the entry. Generated code is
//! derived from these orders only, so output is reproducible for a fixed input.
//!
//! # Fallback
//!
//! After parsing, every entry has a translation for every known language.
//! Languages an entry does not define reuse the entry's default-language
//! base text; conditional variants are never inherited.

use std::collections::{HashMap, HashSet};

use serde_yaml::Value;
use tracing::debug;

use crate::core::key::EntryKey;
use crate::core::language::{method_name, resolve_language, validate_language_code};
use crate::core::template::{LanguageKey, TranslationTemplate};
use crate::core::CompileError;
use crate::utils::{is_identifier, snake_case, upper_camel_case};

/// Reserved top-level field naming the default language.
pub const DEFAULT_FIELD: &str = "default";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject parenthesized identifiers that are not declared parameters.
    pub strict_placeholders: bool,
}

/// One `language(condition)` alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    /// Boolean expression over the entry's parameters, kept verbatim.
    pub condition: String,
    pub template: TranslationTemplate,
}

/// Translation of one entry into one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSpec {
    pub base: TranslationTemplate,
    /// Evaluated top to bottom before falling through to `base`.
    pub conditionals: Vec<Conditional>,
    /// True when the entry did not define this language and `base` was
    /// taken from the default language.
    pub is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: EntryKey,
    variant_name: String,
    function_name: String,
    translations: HashMap<String, TranslationSpec>,
}

impl Entry {
    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.key.parameters
    }

    /// Enum variant name, e.g. `HelloPair` for `helloPair`.
    pub fn variant_name(&self) -> &str {
        &self.variant_name
    }

    /// Facade function name, e.g. `hello_pair` for `helloPair`.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Translation for `language`. Defined for every known language of the
    /// catalog the entry belongs to.
    pub fn translation(&self, language: &str) -> Option<&TranslationSpec> {
        self.translations.get(language)
    }
}

/// Validated, fallback-complete translation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCatalog {
    default_language: String,
    languages: Vec<String>,
    entries: Vec<Entry>,
}

/// Entry as read from the document, before fallback is applied.
struct RawEntry {
    key: EntryKey,
    raw_key: String,
    plain: Vec<(String, TranslationTemplate)>,
    conditionals: Vec<(String, Conditional)>,
}

impl RawEntry {
    fn plain(&self, language: &str) -> Option<&TranslationTemplate> {
        self.plain
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, template)| template)
    }
}

impl TranslationCatalog {
    pub fn parse(source: &str, options: &ParseOptions) -> Result<Self, CompileError> {
        let document: Value = serde_yaml::from_str(source)
            .map_err(|e| CompileError::UnparsableDefinition(e.to_string()))?;
        let Value::Mapping(root) = document else {
            return Err(CompileError::UnparsableDefinition(
                "top level must be a mapping".to_string(),
            ));
        };

        let default_language = match root.get(DEFAULT_FIELD) {
            Some(Value::String(code)) if validate_language_code(code).is_ok() => code.clone(),
            _ => return Err(CompileError::MissingDefaultLanguage),
        };
        debug!(default = %default_language, "parsing translation catalog");

        let mut languages: Vec<String> = Vec::new();
        let mut raw_entries: Vec<RawEntry> = Vec::new();
        let mut variant_names: HashSet<String> = HashSet::new();
        let mut function_names: HashSet<String> = HashSet::new();

        for (raw_key, value) in &root {
            let Some(raw_key) = raw_key.as_str() else {
                return Err(CompileError::UnparsableDefinition(format!(
                    "entry keys must be strings, found {}",
                    describe(raw_key)
                )));
            };
            if raw_key == DEFAULT_FIELD {
                continue;
            }

            let entry = parse_entry(raw_key, value, &default_language, options)?;

            let variant_name = upper_camel_case(&entry.key.name);
            let function_name = snake_case(&entry.key.name);
            if !is_identifier(&variant_name) || !is_identifier(&function_name) {
                return Err(CompileError::invalid_key(
                    raw_key,
                    "name does not produce a valid Rust identifier",
                ));
            }
            if !variant_names.insert(variant_name) || !function_names.insert(function_name) {
                return Err(CompileError::DuplicateEntry(entry.key.name.clone()));
            }

            for (language, _) in &entry.plain {
                if !languages.contains(language) {
                    languages.push(language.clone());
                }
            }
            raw_entries.push(entry);
        }

        if !languages.contains(&default_language) {
            languages.push(default_language.clone());
        }

        let mut method_names: HashSet<String> = HashSet::new();
        for language in &languages {
            if !method_names.insert(method_name(language)) {
                return Err(CompileError::invalid_language(
                    language,
                    format!(
                        "collides with another language on method `{}`",
                        method_name(language)
                    ),
                ));
            }
        }

        let entries = raw_entries
            .into_iter()
            .map(|raw| complete_entry(raw, &languages, &default_language))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            entries = entries.len(),
            languages = languages.len(),
            "parsed translation catalog"
        );

        Ok(Self {
            default_language,
            languages,
            entries,
        })
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Known languages in canonical order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Language the generated code picks for the runtime locale `locale`.
    pub fn resolve(&self, locale: &str) -> &str {
        resolve_language(locale, &self.languages, &self.default_language)
    }

    /// `(entry, language)` pairs that fall back to the default language.
    pub fn untranslated(&self) -> Vec<(&Entry, &str)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                self.languages.iter().filter_map(move |language| {
                    entry
                        .translation(language)
                        .filter(|spec| spec.is_fallback)
                        .map(|_| (entry, language.as_str()))
                })
            })
            .collect()
    }
}

fn parse_entry(
    raw_key: &str,
    value: &Value,
    default_language: &str,
    options: &ParseOptions,
) -> Result<RawEntry, CompileError> {
    let key = EntryKey::parse(raw_key)?;
    let Value::Mapping(map) = value else {
        return Err(CompileError::UnparsableDefinition(format!(
            "entry `{}` must map language codes to text, found {}",
            raw_key,
            describe(value)
        )));
    };

    let mut entry = RawEntry {
        key,
        raw_key: raw_key.to_string(),
        plain: Vec::new(),
        conditionals: Vec::new(),
    };

    for (language_key, text) in map {
        let (language_key, text) = translation_pair(raw_key, language_key, text)?;
        let template = if options.strict_placeholders {
            TranslationTemplate::parse_strict(raw_key, &text, &entry.key.parameters)?
        } else {
            TranslationTemplate::parse(&text, &entry.key.parameters)
        };

        match LanguageKey::parse(raw_key, &language_key)? {
            LanguageKey::Plain(language) => {
                validate_language_code(&language)?;
                entry.plain.push((language, template));
            }
            LanguageKey::Conditional {
                language,
                condition,
            } => {
                validate_language_code(&language)?;
                entry
                    .conditionals
                    .push((language, Conditional { condition, template }));
            }
        }
    }

    if entry.plain(default_language).is_none() {
        return Err(CompileError::MissingTranslationInDefaultLanguage(
            raw_key.to_string(),
        ));
    }
    if let Some((language, _)) = entry
        .conditionals
        .iter()
        .find(|(language, _)| entry.plain(language).is_none())
    {
        return Err(CompileError::OrphanConditional {
            key: raw_key.to_string(),
            language: language.clone(),
        });
    }

    Ok(entry)
}

fn translation_pair(
    raw_key: &str,
    language_key: &Value,
    text: &Value,
) -> Result<(String, String), CompileError> {
    let Some(language_key) = language_key.as_str() else {
        return Err(CompileError::UnparsableDefinition(format!(
            "entry `{}`: language keys must be strings, found {}",
            raw_key,
            describe(language_key)
        )));
    };
    let text = match text {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => {
            return Err(CompileError::UnparsableDefinition(format!(
                "entry `{}`: translation for `{}` must be text, found {}",
                raw_key,
                language_key,
                describe(other)
            )));
        }
    };
    Ok((language_key.to_string(), text))
}

fn complete_entry(
    raw: RawEntry,
    languages: &[String],
    default_language: &str,
) -> Result<Entry, CompileError> {
    let default_base = raw
        .plain(default_language)
        .cloned()
        .ok_or_else(|| CompileError::MissingTranslationInDefaultLanguage(raw.raw_key.clone()))?;

    let mut translations = HashMap::with_capacity(languages.len());
    for language in languages {
        let spec = match raw.plain(language) {
            Some(base) => TranslationSpec {
                base: base.clone(),
                conditionals: raw
                    .conditionals
                    .iter()
                    .filter(|(code, _)| code == language)
                    .map(|(_, conditional)| conditional.clone())
                    .collect(),
                is_fallback: false,
            },
            None => {
                debug!(entry = %raw.raw_key, %language, "falling back to default language");
                TranslationSpec {
                    base: default_base.clone(),
                    conditionals: Vec::new(),
                    is_fallback: true,
                }
            }
        };
        translations.insert(language.clone(), spec);
    }

    Ok(Entry {
        variant_name: upper_camel_case(&raw.key.name),
        function_name: snake_case(&raw.key.name),
        key: raw.key,
        translations,
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
