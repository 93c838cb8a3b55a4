use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod diagnostic;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use diagnostic::{Diagnostic, Severity};
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive, e.g. `locgen=debug`.
pub const LOG_ENV_VAR: &str = "LOCGEN_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    init_tracing(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(result.status.into())
}

/// Log to stderr so generated code printed with `--stdout` stays clean.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
