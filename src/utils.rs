//! Identifier helpers shared by the parser and the code generator.

/// Strict and reserved Rust keywords, which cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Checks if the text is an ASCII identifier usable in generated code.
///
/// # Examples
///
/// ```
/// use locgen::utils::is_identifier;
///
/// assert!(is_identifier("name"));
/// assert!(is_identifier("name_2"));
/// assert!(is_identifier("_private"));
/// assert!(!is_identifier("2name"));
/// assert!(!is_identifier("first name"));
/// assert!(!is_identifier("_"));
/// assert!(!is_identifier("type"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let valid_start = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => false,
    };
    valid_start
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && text != "_"
        && !is_keyword(text)
}

/// Converts `helloPair` or `hello_pair` to `HelloPair`.
pub fn upper_camel_case(text: &str) -> String {
    text.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts `helloPair` or `HelloPair` to `hello_pair`.
pub fn snake_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if c.is_ascii_uppercase() {
            if previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
        previous = Some(c);
    }
    result
}

/// Renders text as a Rust string literal, quotes included.
pub fn string_literal(text: &str) -> String {
    format!("{:?}", text)
}
