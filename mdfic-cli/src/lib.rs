//! mdfic CLI library
//!
//! This library provides the command-line interface for turning markdown
//! manuscripts into post threads and edit-sized chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
