//! Catalog model and parser.
//!
//! - `key`: entry key parsing (`name(param1, param2)`)
//! - `template`: translation text and conditional language keys
//! - `language`: language code validation and locale resolution
//! - `catalog`: the validated, fallback-complete [`TranslationCatalog`]
//! - `error`: the [`CompileError`] taxonomy

pub mod catalog;
mod error;
pub mod key;
pub mod language;
pub mod template;

pub use catalog::{
    Conditional, DEFAULT_FIELD, Entry, ParseOptions, TranslationCatalog, TranslationSpec,
};
pub use error::CompileError;
pub use key::EntryKey;
pub use language::resolve_language;
pub use template::{LanguageKey, Segment, TranslationTemplate};
