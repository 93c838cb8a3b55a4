use std::{fs, path::Path};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::finish(
            CommandSummary::Init(InitSummary { created: false }),
            Vec::new(),
            ExitStatus::Failure,
            ExitStatus::Failure,
        ));
    }

    fs::write(config_path, default_config_json()?)?;

    Ok(CommandResult::finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        ExitStatus::Success,
        ExitStatus::Failure,
    ))
}
