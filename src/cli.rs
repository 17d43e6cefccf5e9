//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use giticket::config::{Config, ConfigSource};
use giticket::core::models::{IdempotenceBasis, Mode};
use giticket::output::OutputMode;

/// giticket - Prefix commit messages with tickets from the branch name
#[derive(Parser, Debug)]
#[command(
    name = "giticket",
    version,
    about = "Prefix commit messages with tickets from the branch name",
    long_about = "Run as a commit-msg hook: reads the current git branch, finds ticket ids \
                  in it, and rewrites the first line of the commit message file.\n\n\
                  Settings come from ~/.config/giticket/config.toml, then .giticket.toml, \
                  then these flags."
)]
pub struct Cli {
    /// Commit message file; only the first path is used
    #[arg(required = true, value_name = "FILE")]
    pub filenames: Vec<PathBuf>,

    /// Pattern that finds tickets in the branch name [default: [A-Z]+-\d+]
    #[arg(long)]
    pub regex: Option<String>,

    /// Template for the new first line, with {ticket}, {tickets}, {commit_msg},
    /// {ticket_number} [default: "{ticket} {commit_msg}"]
    #[arg(long)]
    pub format: Option<String>,

    /// How tickets are taken from the branch: underscore_split, regex_match
    /// [default: underscore_split]
    #[arg(long, num_args = 0..=1, default_missing_value = "underscore_split")]
    pub mode: Option<Mode>,

    /// Pattern carving a ticket number out of the primary ticket
    #[arg(long = "ticket_number", visible_alias = "ticket-number")]
    pub ticket_number: Option<Option<String>>,

    /// Tokens the already-present check looks for: matches, composed
    /// [default: matches]
    #[arg(long)]
    pub idempotence: Option<IdempotenceBasis>,

    /// Extra characters allowed per ticket by the already-present check
    /// [default: 2]
    #[arg(long, value_name = "N")]
    pub window_padding: Option<usize>,

    /// Read settings from this file instead of the global and project files
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Settings given on the command line, as the top config layer
    ///
    /// Empty `--regex` and `--format` values count as unset.
    fn overrides(&self) -> Config {
        Config {
            regex: self.regex.clone().filter(|s| !s.is_empty()),
            format: self.format.clone().filter(|s| !s.is_empty()),
            mode: self.mode,
            ticket_number: self.ticket_number.clone().flatten(),
            idempotence: self.idempotence,
            window_padding: self.window_padding,
        }
    }

    fn config_source(&self) -> anyhow::Result<ConfigSource> {
        if self.no_config {
            return Ok(ConfigSource::Disabled);
        }
        Ok(match &self.config {
            Some(path) => ConfigSource::Explicit(path.clone()),
            None => ConfigSource::discover(&std::env::current_dir()?),
        })
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let source = cli.config_source()?;
    let mut config = Config::from_source(&source)?.merge(cli.overrides());
    // A bare `--ticket_number` switches number extraction off
    if cli.ticket_number == Some(None) {
        config.ticket_number = None;
    }

    commands::rewrite(&cli.filenames, config, output_mode)
}
