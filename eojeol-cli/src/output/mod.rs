//! Output formatting module

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use eojeol_core::pos::Extraction;
use eojeol_core::Token;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Tokens of one input line
#[derive(Debug, Clone, Serialize)]
pub struct TokenizedLine {
    /// Source file
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// Tokens with offsets relative to the line
    pub tokens: Vec<Token>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the tokens of one line
    fn format_line(&mut self, line: &TokenizedLine) -> Result<()>;

    /// Format and output an extraction result
    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Writer for `path`, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formatter for `format`, writing to `path` or stdout
pub fn create_formatter(
    format: OutputFormat,
    path: Option<&Path>,
    pretty_json: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let writer = open_writer(path)?;
    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    })
}
