//! Plain text output formatter

use super::{OutputFormatter, TokenizedLine};
use anyhow::Result;
use eojeol_core::pos::{Extraction, FrequencyTable};
use eojeol_core::{Predicator, Token};
use std::collections::HashMap;
use std::io::Write;

/// Plain text formatter
///
/// Tokenized lines become space-separated words. Extraction results become
/// one tab-separated section per category, most frequent first.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_table(&mut self, title: &str, table: &FrequencyTable) -> Result<()> {
        writeln!(self.writer, "## {title} ({})", table.len())?;
        for (word, count) in by_frequency(table.iter().map(|(w, c)| (w, *c))) {
            writeln!(self.writer, "{word}\t{count}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_predicators(
        &mut self,
        title: &str,
        table: &HashMap<String, Predicator>,
    ) -> Result<()> {
        writeln!(self.writer, "## {title} ({})", table.len())?;
        for (word, count) in by_frequency(table.iter().map(|(w, p)| (w, p.count))) {
            let lemma: Vec<String> = table[word].lemma.iter().map(|l| l.to_string()).collect();
            writeln!(self.writer, "{word}\t{count}\t{}", lemma.join(","))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Entries sorted by descending count, then surface form
fn by_frequency<'a>(entries: impl Iterator<Item = (&'a String, u64)>) -> Vec<(&'a String, u64)> {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &TokenizedLine) -> Result<()> {
        let words: Vec<&str> = line
            .tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(Token::word)
            .collect();
        writeln!(self.writer, "{}", words.join(" "))?;
        Ok(())
    }

    fn format_extraction(&mut self, extraction: &Extraction) -> Result<()> {
        self.write_table("Noun", &extraction.nouns)?;
        self.write_predicators("Adjective", &extraction.adjectives)?;
        self.write_predicators("Verb", &extraction.verbs)?;
        self.write_table("Josa", &extraction.josas)?;
        self.write_table("Irrecognized", &extraction.irrecognized)?;

        writeln!(self.writer, "## Statistics")?;
        write!(self.writer, "{}", extraction.statistics)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
