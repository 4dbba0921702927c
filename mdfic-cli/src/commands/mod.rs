//! CLI command implementations

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mdfic_core::EditStrength;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::CliConfig;

pub mod chunk;
pub mod copyedit;
pub mod generate_config;
pub mod thread;
pub mod wc;

/// Tools for rendering fiction written in markdown into other formats
#[derive(Debug, Parser)]
#[command(name = "mdfic", version)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "MDFIC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Break a manuscript into a numbered thread of posts
    Thread(thread::ThreadArgs),

    /// Print the edit-sized chunks of a manuscript
    Chunk(chunk::ChunkArgs),

    /// Copy-edit a manuscript chunk by chunk through an external filter
    Copyedit(copyedit::CopyeditArgs),

    /// Print word counts and approximate reading times
    Wc(wc::WcArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Input files shared by the text commands
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or glob patterns, concatenated in order (default: stdin)
    #[arg(value_name = "FILE/PATTERN")]
    pub files: Vec<String>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered records separated by `####` lines
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Edit strength requested from the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Fix errors only
    Light,
    /// Fix errors and tighten phrasing
    Medium,
    /// Rework freely
    Heavy,
}

impl From<Strength> for EditStrength {
    fn from(strength: Strength) -> Self {
        match strength {
            Strength::Light => EditStrength::Light,
            Strength::Medium => EditStrength::Medium,
            Strength::Heavy => EditStrength::Heavy,
        }
    }
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::debug!("Arguments: {:?}", self);
        let config = CliConfig::load(self.config.as_deref())?;

        match &self.command {
            Commands::Thread(args) => args.execute(&config),
            Commands::Chunk(args) => args.execute(&config),
            Commands::Copyedit(args) => args.execute(&config, self.quiet),
            Commands::Wc(args) => args.execute(&config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // a logger may already be installed when running in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
