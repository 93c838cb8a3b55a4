//! Entry key parsing.
//!
//! Keys are written `name` or `name(param1, param2)`. Conditional language
//! keys share the same outer shape (`en(count == "1")`), so the splitting
//! logic lives here too.

use std::fmt;

use crate::core::CompileError;
use crate::utils::is_identifier;

/// Name and ordered parameters of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub name: String,
    pub parameters: Vec<String>,
}

impl EntryKey {
    /// Parse a raw key such as `helloPair(name1, name2)`.
    ///
    /// Parameters are separated by `,` and surrounding whitespace is ignored.
    /// An empty list (`house()`) yields a parameterless key.
    pub fn parse(raw: &str) -> Result<Self, CompileError> {
        let (name, parameters) = match split_parenthesized(raw)
            .map_err(|reason| CompileError::invalid_key(raw, reason))?
        {
            None => (raw, Vec::new()),
            Some((name, inner)) => {
                if inner.contains('(') || inner.contains(')') {
                    return Err(CompileError::invalid_key(
                        raw,
                        "nested parentheses in parameter list",
                    ));
                }
                let parameters = if inner.trim().is_empty() {
                    Vec::new()
                } else {
                    inner.split(',').map(|p| p.trim().to_string()).collect()
                };
                (name, parameters)
            }
        };

        if !is_identifier(name) {
            return Err(CompileError::invalid_key(
                raw,
                format!("`{}` is not a valid identifier", name),
            ));
        }

        for (index, param) in parameters.iter().enumerate() {
            if !is_identifier(param) {
                return Err(CompileError::invalid_key(
                    raw,
                    format!("parameter `{}` is not a valid identifier", param),
                ));
            }
            if parameters[..index].contains(param) {
                return Err(CompileError::invalid_key(
                    raw,
                    format!("parameter `{}` is declared twice", param),
                ));
            }
        }

        Ok(Self {
            name: name.to_string(),
            parameters,
        })
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.parameters.join(", "))
        }
    }
}

/// Split `head(inner)` into `(head, inner)`.
///
/// Returns `Ok(None)` when the text contains no parentheses at all. The split
/// happens at the first `(`, and the text must end with the `)` that closes it.
/// Parentheses inside double-quoted string literals are not counted.
pub(crate) fn split_parenthesized(raw: &str) -> Result<Option<(&str, &str)>, &'static str> {
    let Some(open) = raw.find('(') else {
        if raw.contains(')') {
            return Err("unbalanced parentheses");
        }
        return Ok(None);
    };

    let head = &raw[..open];
    let rest = &raw[open + 1..];
    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in rest.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    if offset + 1 != rest.len() {
                        return Err("unexpected text after closing parenthesis");
                    }
                    return Ok(Some((head, &rest[..offset])));
                }
            }
            _ => {}
        }
    }

    if in_string {
        Err("unterminated string literal")
    } else {
        Err("unbalanced parentheses")
    }
}
