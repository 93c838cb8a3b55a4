//! Locgen - translation catalog compiler
//!
//! Locgen compiles a YAML translation catalog (phrase keys mapped to
//! per-language text, optionally parameterized and optionally conditioned on
//! argument values) into Rust source: a typed accessor enum with one method per
//! language, a locale-prefix resolver with a default-language fallback, and a
//! flat facade module.
//!
//! ```
//! let source = "default: en\nhouse:\n  en: House\n  de: Haus\n";
//! let code = locgen::compile(source, &locgen::CompileOptions::default())?;
//! assert!(code.accessors.contains("pub enum Localized"));
//! assert!(code.facade.contains("pub fn house() -> String"));
//! # Ok::<(), locgen::CompileError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (generate, check, preview, init)
//! - `codegen`: Rust code generation from a validated catalog
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, parser and locale resolution
//! - `preview`: Evaluate a catalog entry without compiling generated code
//! - `utils`: Shared identifier helpers

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod preview;
pub mod utils;

pub use codegen::{GenerateOptions, GeneratedCode, Generator};
pub use core::{CompileError, ParseOptions, TranslationCatalog};

/// Options for both compilation stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub parse: ParseOptions,
    pub generate: GenerateOptions,
}

/// Parse `source` and generate the accessor and facade artifacts.
///
/// Parsing completes before any code is generated; on error nothing is
/// produced.
pub fn compile(source: &str, options: &CompileOptions) -> Result<GeneratedCode, CompileError> {
    let catalog = TranslationCatalog::parse(source, &options.parse)?;
    Ok(Generator::new(&catalog, &options.generate)
        .with_source(source)
        .generate())
}
