use std::fs;

use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::diagnostic::Diagnostic;
use super::super::exit_status::ExitStatus;
use super::{CheckSummary, CommandResult, CommandSummary, CompileContext};
use crate::{Generator, TranslationCatalog};

/// Compile the catalog without writing anything.
///
/// Untranslated entries are warnings. A generated file that no longer matches
/// the catalog is an error and exits with [`ExitStatus::Failure`].
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CompileContext::new(&args.common)?;

    let mut options = ctx.config.compile_options();
    options.parse.strict_placeholders |= args.strict;
    options.generate.embed_source |= args.embed_source;

    let catalog = match TranslationCatalog::parse(&ctx.source, &options.parse) {
        Ok(catalog) => catalog,
        Err(err) => return Ok(CommandResult::failed(Diagnostic::compile_error(&ctx.input, &err))),
    };

    let mut diagnostics: Vec<Diagnostic> = catalog
        .untranslated()
        .into_iter()
        .map(|(entry, language)| {
            Diagnostic::untranslated(
                &ctx.input,
                &entry.key().to_string(),
                language,
                catalog.default_language(),
            )
        })
        .collect();
    let untranslated_count = diagnostics.len();

    let up_to_date = match fs::read_to_string(&ctx.output) {
        Ok(existing) => {
            let expected = Generator::new(&catalog, &options.generate)
                .with_source(&ctx.source)
                .generate()
                .into_source();
            let fresh = existing == expected;
            if !fresh {
                diagnostics.push(Diagnostic::stale_output(&ctx.output));
            }
            Some(fresh)
        }
        Err(_) => {
            diagnostics.push(Diagnostic::missing_output(&ctx.output));
            None
        }
    };

    Ok(CommandResult::finish(
        CommandSummary::Check(CheckSummary {
            entry_count: catalog.entries().len(),
            language_count: catalog.languages().len(),
            untranslated_count,
            up_to_date,
        }),
        diagnostics,
        ExitStatus::Success,
        ExitStatus::Failure,
    ))
}
