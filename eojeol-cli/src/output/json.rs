//! JSON output formatter

use super::{OutputFormatter, TokenizedLine};
use anyhow::Result;
use eojeol_core::pos::Extraction;
use serde::Serialize;
use std::io::Write;

/// JSON formatter
///
/// Tokenized lines are collected and written as one array on `finish`;
/// an extraction result is written as a single object.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<TokenizedLine>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &TokenizedLine) -> Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }

    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()> {
        self.write_value(extraction)
    }

    fn finish(&mut self) -> Result<()> {
        if !self.lines.is_empty() {
            let lines = std::mem::take(&mut self.lines);
            self.write_value(&lines)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
