use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::GenerateCommand;
use super::super::diagnostic::Diagnostic;
use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, CompileContext, GenerateOutput, GenerateSummary};
use crate::{Generator, TranslationCatalog};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CompileContext::new(&args.common)?;

    let mut options = ctx.config.compile_options();
    options.parse.strict_placeholders |= args.strict;
    options.generate.embed_source |= args.embed_source;

    let catalog = match TranslationCatalog::parse(&ctx.source, &options.parse) {
        Ok(catalog) => catalog,
        Err(err) => return Ok(CommandResult::failed(Diagnostic::compile_error(&ctx.input, &err))),
    };
    let source = Generator::new(&catalog, &options.generate)
        .with_source(&ctx.source)
        .generate()
        .into_source();

    let output = if args.stdout {
        GenerateOutput::Stdout(source)
    } else {
        let changed = match fs::read_to_string(&ctx.output) {
            Ok(existing) => existing != source,
            Err(_) => true,
        };
        if changed {
            if let Some(parent) = ctx.output.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&ctx.output, &source)
                .with_context(|| format!("Failed to write file: {}", ctx.output.display()))?;
        }
        debug!(output = %ctx.output.display(), changed, "generated accessors");
        GenerateOutput::File {
            path: ctx.output.clone(),
            changed,
        }
    };

    Ok(CommandResult::finish(
        CommandSummary::Generate(GenerateSummary {
            entry_count: catalog.entries().len(),
            language_count: catalog.languages().len(),
            output,
        }),
        Vec::new(),
        ExitStatus::Success,
        ExitStatus::Error,
    ))
}
