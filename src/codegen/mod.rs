//! Rust code generation from a validated catalog.
//!
//! The output is two artifacts:
//!
//! 1. **Accessors**: an enum with one variant per entry plus an `impl` with one
//!    method per language, `string_for(locale)` (locale prefix resolution) and
//!    `string()` (system locale, memoized).
//! 2. **Facade**: a module with one function per entry that builds the variant
//!    and calls `string()`.
//!
//! Entries and languages are emitted in catalog order, so a fixed catalog
//! always produces byte-identical output.

mod writer;

use tracing::debug;

use crate::core::{Entry, TranslationCatalog, TranslationSpec, TranslationTemplate};
use crate::core::language::method_name;
use crate::utils::string_literal;

pub use writer::CodeWriter;

pub const GENERATED_HEADER: &str = "// This file is @generated by locgen. DO NOT EDIT.";

/// Environment variables consulted, in order, for the system locale.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Name of the generated enum.
    pub enum_name: String,
    /// Name of the generated facade module.
    pub facade_name: String,
    /// Emit the catalog text as `SOURCE` on the enum.
    pub embed_source: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            enum_name: "Localized".to_string(),
            facade_name: "loc".to_string(),
            embed_source: false,
        }
    }
}

/// The generated accessor and facade artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub accessors: String,
    pub facade: String,
}

impl GeneratedCode {
    /// Both artifacts as one Rust source file.
    pub fn into_source(self) -> String {
        format!(
            "{}\n\n{}\n{}",
            GENERATED_HEADER, self.accessors, self.facade
        )
    }
}

pub struct Generator<'a> {
    catalog: &'a TranslationCatalog,
    options: &'a GenerateOptions,
    source: Option<&'a str>,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a TranslationCatalog, options: &'a GenerateOptions) -> Self {
        Self {
            catalog,
            options,
            source: None,
        }
    }

    /// Catalog text to embed when `embed_source` is set.
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn generate(&self) -> GeneratedCode {
        debug!(
            enum_name = %self.options.enum_name,
            facade = %self.options.facade_name,
            "generating accessors"
        );
        GeneratedCode {
            accessors: self.render_accessors(),
            facade: self.render_facade(),
        }
    }

    // ============================================================
    // Accessors
    // ============================================================

    fn render_accessors(&self) -> String {
        let mut w = CodeWriter::new();
        self.render_enum(&mut w);
        w.blank();

        w.line("#[allow(non_snake_case, unused_variables)]");
        w.open(format!("impl {} {{", self.options.enum_name));
        if self.options.embed_source
            && let Some(source) = self.source
        {
            w.line("/// Catalog this code was generated from.");
            w.line(format!(
                "pub const SOURCE: &'static str = {};",
                string_literal(source)
            ));
            w.blank();
        }
        self.render_default_accessor(&mut w);
        w.blank();
        self.render_locale_accessor(&mut w);
        for language in self.catalog.languages() {
            w.blank();
            self.render_language_accessor(&mut w, language);
        }
        w.blank();
        render_system_language(&mut w);
        w.close("}");
        w.into_string()
    }

    fn render_enum(&self, w: &mut CodeWriter) {
        w.line(format!(
            "/// Localized phrases. Default language: `{}`.",
            self.catalog.default_language()
        ));
        w.line("#[allow(non_snake_case)]");
        w.line("#[derive(Debug, Clone, PartialEq, Eq, Hash)]");
        w.open(format!("pub enum {} {{", self.options.enum_name));
        for entry in self.catalog.entries() {
            if !entry.key().has_parameters() {
                w.line(format!("{},", entry.variant_name()));
            } else {
                let fields: Vec<String> = entry
                    .parameters()
                    .iter()
                    .map(|param| format!("{}: String", param))
                    .collect();
                w.line(format!(
                    "{} {{ {} }},",
                    entry.variant_name(),
                    fields.join(", ")
                ));
            }
        }
        w.close("}");
    }

    fn render_default_accessor(&self, w: &mut CodeWriter) {
        w.line("/// Translation for the system language.");
        w.open("pub fn string(&self) -> String {");
        w.line("self.string_for(Self::system_language())");
        w.close("}");
    }

    /// `string_for`: first non-default language that prefixes `locale`, in
    /// catalog order, else the default language.
    fn render_locale_accessor(&self, w: &mut CodeWriter) {
        let default_language = self.catalog.default_language();
        let candidates: Vec<&String> = self
            .catalog
            .languages()
            .iter()
            .filter(|language| language.as_str() != default_language)
            .collect();

        w.line(format!(
            "/// Translation for `locale`: the first language that is a prefix of it, else `{}`.",
            default_language
        ));
        w.open("pub fn string_for(&self, locale: &str) -> String {");
        if candidates.is_empty() {
            w.line(format!("self.{}()", method_name(default_language)));
        } else {
            for (index, language) in candidates.iter().enumerate() {
                let test = format!("locale.starts_with({})", string_literal(language));
                if index == 0 {
                    w.open(format!("if {} {{", test));
                } else {
                    w.reopen(format!("}} else if {} {{", test));
                }
                w.line(format!("self.{}()", method_name(language)));
            }
            w.reopen("} else {");
            w.line(format!("self.{}()", method_name(default_language)));
            w.close("}");
        }
        w.close("}");
    }

    fn render_language_accessor(&self, w: &mut CodeWriter, language: &str) {
        w.line(format!("/// `{}` translation.", language));
        w.open(format!("pub fn {}(&self) -> String {{", method_name(language)));
        if self.catalog.entries().is_empty() {
            w.line("match *self {}");
        } else {
            w.open("match self {");
            for entry in self.catalog.entries() {
                if let Some(spec) = entry.translation(language) {
                    render_arm(w, entry, spec);
                }
            }
            w.close("}");
        }
        w.close("}");
    }

    // ============================================================
    // Facade
    // ============================================================

    fn render_facade(&self) -> String {
        let enum_name = &self.options.enum_name;
        let mut w = CodeWriter::new();
        w.line(format!(
            "/// Shortcuts for `{}` in the system language.",
            enum_name
        ));
        w.line("#[allow(non_snake_case)]");
        w.open(format!("pub mod {} {{", self.options.facade_name));
        for (index, entry) in self.catalog.entries().iter().enumerate() {
            if index > 0 {
                w.blank();
            }
            let variant = format!("super::{}::{}", enum_name, entry.variant_name());
            if !entry.key().has_parameters() {
                w.open(format!("pub fn {}() -> String {{", entry.function_name()));
                w.line(format!("{}.string()", variant));
            } else {
                let params: Vec<String> = entry
                    .parameters()
                    .iter()
                    .map(|param| format!("{}: &str", param))
                    .collect();
                let fields: Vec<String> = entry
                    .parameters()
                    .iter()
                    .map(|param| format!("{}: {}.to_owned()", param, param))
                    .collect();
                w.open(format!(
                    "pub fn {}({}) -> String {{",
                    entry.function_name(),
                    params.join(", ")
                ));
                w.line(format!("{} {{ {} }}.string()", variant, fields.join(", ")));
            }
            w.close("}");
        }
        w.close("}");
        w.into_string()
    }
}

/// Match arm for one entry: the conditional chain in order, then the base text.
fn render_arm(w: &mut CodeWriter, entry: &Entry, spec: &TranslationSpec) {
    let pattern = if !entry.key().has_parameters() {
        format!("Self::{}", entry.variant_name())
    } else {
        format!(
            "Self::{} {{ {} }}",
            entry.variant_name(),
            entry.parameters().join(", ")
        )
    };

    if spec.conditionals.is_empty() {
        w.line(format!("{} => {},", pattern, template_expr(&spec.base)));
        return;
    }

    w.open(format!("{} => {{", pattern));
    for (index, conditional) in spec.conditionals.iter().enumerate() {
        if index == 0 {
            w.open(format!("if {} {{", conditional.condition));
        } else {
            w.reopen(format!("}} else if {} {{", conditional.condition));
        }
        w.line(template_expr(&conditional.template));
    }
    w.reopen("} else {");
    w.line(template_expr(&spec.base));
    w.close("}");
    w.close("}");
}

/// Expression producing the template text as a `String`.
fn template_expr(template: &TranslationTemplate) -> String {
    if template.has_placeholders() {
        format!("format!({})", string_literal(&template.format_string()))
    } else {
        format!("String::from({})", string_literal(&template.to_string()))
    }
}

fn render_system_language(w: &mut CodeWriter) {
    let vars: Vec<String> = LOCALE_ENV_VARS.iter().map(|v| string_literal(v)).collect();
    w.open("fn system_language() -> &'static str {");
    w.line("static LANGUAGE: std::sync::OnceLock<String> = std::sync::OnceLock::new();");
    w.open("LANGUAGE.get_or_init(|| {");
    w.line(format!("[{}]", vars.join(", ")));
    w.line("    .into_iter()");
    w.line("    .filter_map(|name| std::env::var(name).ok())");
    w.line("    .find(|value| !value.is_empty())");
    w.line("    .unwrap_or_default()");
    w.close("})");
    w.close("}");
}
