//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("-"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve file patterns to input sources.
///
/// Patterns keep the order they were given in; the files matched by one glob
/// are sorted. `-` and an empty pattern list both mean standard input.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            sources.push(InputSource::Stdin);
            continue;
        }

        // An existing file wins even when its name contains glob characters.
        if Path::new(pattern).is_file() {
            sources.push(InputSource::File(PathBuf::from(pattern)));
            continue;
        }

        if !is_glob(pattern) {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            anyhow::bail!("No files found matching pattern: {pattern}");
        }

        matched.sort();
        sources.extend(matched.into_iter().map(InputSource::File));
    }

    Ok(sources)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
