//! Language codes and runtime locale resolution.

use crate::core::CompileError;
use crate::utils::is_keyword;

/// Associated item names the generated accessor type already uses.
pub const RESERVED_METHOD_NAMES: &[&str] =
    &["string", "string_for", "system_language", "SOURCE"];

/// Validate a language code such as `en`, `de_CH` or `zh-Hans`.
///
/// Codes are opaque and case-sensitive; no normalization happens here.
pub fn validate_language_code(code: &str) -> Result<(), CompileError> {
    let mut chars = code.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(CompileError::invalid_language(
            code,
            "expected [A-Za-z][A-Za-z0-9_-]*",
        ));
    }

    let method = method_name(code);
    if is_keyword(&method) {
        return Err(CompileError::invalid_language(code, "is a Rust keyword"));
    }
    if RESERVED_METHOD_NAMES.contains(&method.as_str()) {
        return Err(CompileError::invalid_language(
            code,
            "collides with a generated item",
        ));
    }
    Ok(())
}

/// Name of the generated per-language accessor (`zh-Hans` -> `zh_Hans`).
pub fn method_name(code: &str) -> String {
    code.replace('-', "_")
}

/// Pick the language to use for `requested`.
///
/// Scans `known` in order, skipping `default`, and returns the first code that
/// is a prefix of `requested`; otherwise `default`. This is a plain ordered
/// prefix scan rather than BCP-47 negotiation: `de_CH` matches `de`, and when
/// two known codes are prefixes of each other the earlier one wins.
///
/// # Examples
///
/// ```
/// use locgen::core::resolve_language;
///
/// let known = ["en".to_string(), "de".to_string()];
/// let default = "en".to_string();
/// assert_eq!(resolve_language("de_CH", &known, &default), "de");
/// assert_eq!(resolve_language("fr", &known, &default), "en");
/// ```
pub fn resolve_language<'a>(requested: &str, known: &'a [String], default: &'a str) -> &'a str {
    known
        .iter()
        .filter(|language| language.as_str() != default)
        .find(|language| requested.starts_with(language.as_str()))
        .map(String::as_str)
        .unwrap_or(default)
}
