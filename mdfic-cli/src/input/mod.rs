//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::{resolve_patterns, InputSource};

use anyhow::Result;

/// Read and concatenate every input named by `patterns`, in order
pub fn read_all(patterns: &[String]) -> Result<String> {
    let mut text = String::new();
    for source in resolve_patterns(patterns)? {
        text.push_str(&FileReader::read_source(&source)?);
    }
    Ok(text)
}
