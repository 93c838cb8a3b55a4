/// Dispatch parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with diagnostics and the exit status to use
/// - `Err` if the command cannot run at all (e.g. unreadable catalog, invalid config)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, generate::generate, init::init, preview::preview},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Preview(cmd)) => preview(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
