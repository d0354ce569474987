//! Extract command implementation

use crate::config::{CliConfig, OutputFormat};
use crate::input::{count_eojeols, load_dictionaries, parse_counts, resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use eojeol_core::pos::{FrequencyTable, PosExtractor};
use eojeol_core::Dictionaries;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Eojeol count files (eojeol<TAB>count) or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Dictionaries learned from the corpus (JSON)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionaries: PathBuf,

    /// Treat inputs as raw text and count whitespace-separated eojeols
    #[arg(long)]
    pub raw: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: taken from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the dictionaries, grown by the pipeline, to this file
    #[arg(long, value_name = "FILE")]
    pub save_dictionaries: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting extraction");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let mut exclude = vec![self.dictionaries.as_path()];
        exclude.extend(self.output.as_deref());
        exclude.extend(self.save_dictionaries.as_deref());
        exclude.extend(self.config.as_deref());
        let files = resolve_patterns(&self.input, &exclude)?;
        let dictionaries = load_dictionaries(&self.dictionaries)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64, "eojeols");

        let mut eojeols = FrequencyTable::new();
        for path in &files {
            let text = FileReader::read_text(path)?;
            let mut counts = FrequencyTable::new();
            if self.raw {
                count_eojeols(&text, &mut counts);
            } else {
                parse_counts(&text, path, &mut counts)?;
            }
            let occurrences: u64 = counts.values().sum();
            for (eojeol, count) in counts {
                *eojeols.entry(eojeol).or_insert(0) += count;
            }
            progress.file_read(path, occurrences as usize);
        }
        log::info!(
            "{} unique eojeols, {} occurrences",
            eojeols.len(),
            progress.items()
        );

        progress.extracting(eojeols.len());
        let mut extractor = PosExtractor::new(dictionaries);
        let extraction = extractor.extract(&eojeols);
        progress.finish();

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter =
            create_formatter(format, self.output.as_deref(), config.output.pretty_json)?;
        formatter.format_extraction(&extraction)?;
        formatter.finish()?;

        if let Some(path) = &self.save_dictionaries {
            save_dictionaries(path, extractor.dictionaries())?;
            log::info!("Dictionaries written to {}", path.display());
        }

        Ok(())
    }
}

fn save_dictionaries(path: &Path, dictionaries: &Dictionaries) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create dictionaries file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), dictionaries)
        .with_context(|| format!("Failed to write dictionaries: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DICTIONARIES: &str = r#"{
        "nouns": {"학교": 10, "사과": 3},
        "verbs": {"갔다": {"count": 2, "lemma": [["가", "았다"]]}},
        "josas": ["에", "를"]
    }"#;

    fn args(dir: &TempDir, input: &str, raw: bool) -> ExtractArgs {
        let dictionaries = dir.path().join("dictionaries.json");
        fs::write(&dictionaries, DICTIONARIES).unwrap();
        let corpus = dir.path().join(if raw { "corpus.txt" } else { "eojeols.tsv" });
        fs::write(&corpus, input).unwrap();

        ExtractArgs {
            input: vec![corpus.display().to_string()],
            dictionaries,
            raw,
            output: Some(dir.path().join("out.json")),
            format: Some(OutputFormat::Json),
            config: None,
            save_dictionaries: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn output(args: &ExtractArgs) -> serde_json::Value {
        let path = args.output.as_ref().unwrap();
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_extract_counts_file() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "학교에\t4\n갔다\t2\n사과를\t1\n", false);
        args.execute().unwrap();

        let value = output(&args);
        assert_eq!(value["nouns"]["학교"], 4);
        assert_eq!(value["nouns"]["사과"], 1);
        assert_eq!(value["josas"]["에"], 4);
        assert_eq!(value["verbs"]["갔다"]["count"], 2);
        assert_eq!(value["statistics"]["total_frequency"], 7);
    }

    #[test]
    fn test_extract_raw_text() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "학교에 갔다\n학교에 사과를\n", true);
        args.execute().unwrap();

        let value = output(&args);
        assert_eq!(value["nouns"]["학교"], 2);
        assert_eq!(value["statistics"]["total_unique"], 3);
    }

    #[test]
    fn test_save_grown_dictionaries() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, "학교에\t4\n", false);
        let saved = dir.path().join("grown.json");
        args.save_dictionaries = Some(saved.clone());
        args.execute().unwrap();

        let grown: Dictionaries =
            serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
        assert!(grown.is_noun("학교"));
        assert!(grown.is_josa("에"));
    }

    #[test]
    fn test_output_matched_by_input_pattern_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, "학교에\t4\n", false);
        let previous = dir.path().join("result.tsv");
        fs::write(&previous, "## Noun (1)\n학교\t4\n").unwrap();
        args.input = vec![format!("{}/*.tsv", dir.path().display())];
        args.output = Some(previous.clone());
        args.format = Some(OutputFormat::Text);
        args.execute().unwrap();

        let content = fs::read_to_string(&previous).unwrap();
        assert!(content.starts_with("## Noun (1)\n학교\t4\n"));
        assert!(content.contains("## Josa (1)\n에\t4\n"));
    }

    #[test]
    fn test_malformed_counts_fail() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "학교에\tmany\n", false);
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("line 1"));
    }
}
