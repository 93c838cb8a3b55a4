use std::{collections::HashMap, env};

use anyhow::Result;

use super::super::args::PreviewCommand;
use super::super::diagnostic::Diagnostic;
use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, CompileContext, PreviewSummary};
use crate::codegen::LOCALE_ENV_VARS;
use crate::TranslationCatalog;

pub fn preview(cmd: PreviewCommand) -> Result<CommandResult> {
    let ctx = CompileContext::new(&cmd.common)?;
    let options = ctx.config.compile_options();

    let catalog = match TranslationCatalog::parse(&ctx.source, &options.parse) {
        Ok(catalog) => catalog,
        Err(err) => return Ok(CommandResult::failed(Diagnostic::compile_error(&ctx.input, &err))),
    };

    let locale = cmd.locale.clone().unwrap_or_else(system_locale);
    let args: HashMap<String, String> = cmd.args.iter().cloned().collect();

    let (rendered, diagnostics) = match crate::preview::preview(&catalog, &cmd.key, &locale, &args) {
        Ok(rendered) => {
            let skipped = rendered
                .skipped
                .iter()
                .map(|condition| Diagnostic::skipped_condition(&ctx.input, &cmd.key, condition))
                .collect();
            (Some(rendered), skipped)
        }
        Err(err) => (None, vec![Diagnostic::preview_error(&ctx.input, &err)]),
    };

    Ok(CommandResult::finish(
        CommandSummary::Preview(PreviewSummary {
            key: cmd.key,
            locale,
            preview: rendered,
        }),
        diagnostics,
        ExitStatus::Success,
        ExitStatus::Error,
    ))
}

/// Same lookup order as the generated `system_language()`.
fn system_locale() -> String {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
