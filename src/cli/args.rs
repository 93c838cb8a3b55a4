//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all locgen commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Compile the catalog and write the generated Rust file
//! - `check`: Compile without writing; report untranslated entries and stale output
//! - `preview`: Render one entry for a locale
//! - `init`: Initialize locgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Preview(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (where the config file is looked up)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Translation catalog (overrides config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Generated Rust file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Reject parenthesized names that are not declared parameters
    #[arg(long)]
    pub strict: bool,

    /// Embed the catalog text as a `SOURCE` constant
    #[arg(long)]
    pub embed_source: bool,

    /// Print the generated code instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Reject parenthesized names that are not declared parameters
    #[arg(long)]
    pub strict: bool,

    /// Compare against output generated with `--embed-source`
    #[arg(long)]
    pub embed_source: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    /// Entry name, e.g. `hello`
    pub key: String,

    /// Locale to resolve (default: system locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Parameter value, can be specified multiple times: --arg name=Peter --arg count=2
    #[arg(short, long = "arg", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{}`", raw)),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile the translation catalog into Rust accessors
    Generate(GenerateCommand),
    /// Validate the catalog and verify the generated file is up to date
    Check(CheckCommand),
    /// Print one entry's translation for a locale
    Preview(PreviewCommand),
    /// Initialize a new .locgenrc.json configuration file
    Init,
}
