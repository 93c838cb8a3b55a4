use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::CompileOptions;
use crate::codegen::GenerateOptions;
use crate::core::ParseOptions;
use crate::utils::is_identifier;

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog to compile.
    #[serde(default = "default_input")]
    pub input: String,
    /// Generated Rust file.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_enum_name")]
    pub enum_name: String,
    #[serde(default = "default_facade_name")]
    pub facade_name: String,
    #[serde(default)]
    pub embed_source: bool,
    #[serde(default)]
    pub strict_placeholders: bool,
}

fn default_input() -> String {
    "Localized.yml".to_string()
}

fn default_output() -> String {
    "src/localized.rs".to_string()
}

fn default_enum_name() -> String {
    "Localized".to_string()
}

fn default_facade_name() -> String {
    "loc".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            enum_name: default_enum_name(),
            facade_name: default_facade_name(),
            embed_source: false,
            strict_placeholders: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the generated item names are not usable Rust identifiers.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.enum_name) {
            bail!("Invalid 'enumName': \"{}\" is not a Rust identifier", self.enum_name);
        }
        if !is_identifier(&self.facade_name) {
            bail!(
                "Invalid 'facadeName': \"{}\" is not a Rust identifier",
                self.facade_name
            );
        }
        if self.enum_name == self.facade_name {
            bail!("'enumName' and 'facadeName' must differ");
        }
        Ok(())
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            parse: ParseOptions {
                strict_placeholders: self.strict_placeholders,
            },
            generate: GenerateOptions {
                enum_name: self.enum_name.clone(),
                facade_name: self.facade_name.clone(),
                embed_source: self.embed_source,
            },
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the relative `input`/`output` paths are resolved against.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
