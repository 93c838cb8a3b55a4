use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};

/// Everything a command needs to compile the project's catalog.
pub struct CompileContext {
    pub config: Config,
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: String,
}

impl CompileContext {
    /// Load config (searching upwards from `--path`), apply CLI overrides and
    /// read the catalog.
    ///
    /// Paths from the config file are relative to the config file's directory;
    /// paths from flags are used as given. Paths below the working directory
    /// are kept relative so diagnostics stay short.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let start = fs::canonicalize(&common.path)
            .with_context(|| format!("Project directory not found: {}", common.path.display()))?;
        let loaded = load_config(&start)?;
        debug!(
            root = %loaded.root.display(),
            from_file = loaded.from_file,
            "loaded configuration"
        );

        let input = common
            .input
            .clone()
            .unwrap_or_else(|| loaded.root.join(&loaded.config.input));
        let output = common
            .output
            .clone()
            .unwrap_or_else(|| loaded.root.join(&loaded.config.output));
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        let input = relative_to(&input, &cwd);
        let output = relative_to(&output, &cwd);

        let source = fs::read_to_string(&input).with_context(|| {
            format!(
                "Failed to read translation catalog: {}\n\
                 Hint: Check the 'input' setting in .locgenrc.json or pass --input.",
                input.display()
            )
        })?;

        Ok(Self {
            config: loaded.config,
            input,
            output,
            source,
        })
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
