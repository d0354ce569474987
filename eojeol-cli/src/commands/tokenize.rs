//! Tokenize command implementation

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::input::{load_scores, resolve_patterns, FileReader};
use crate::output::{create_formatter, TokenizedLine};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Args, ValueEnum};
use eojeol_core::{
    LTokenizer, MaxScoreTokenizer, NounMatchTokenizer, RegexTokenizer, Tokenizer, TokenizerConfig,
    WordScores,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: taken from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Tokenizer to use
    #[arg(short, long, value_enum, default_value = "regex")]
    pub tokenizer: TokenizerKind,

    /// Word scores as word<TAB>score lines or a .json object
    #[arg(short, long, value_name = "FILE")]
    pub scores: Option<PathBuf>,

    /// Custom regex pattern, applied in the order given (regex tokenizer)
    #[arg(long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Drop the right part of every eojeol (l tokenizer)
    #[arg(long)]
    pub remove_r: bool,

    /// Keep only nouns that start their eojeol (noun-match tokenizer)
    #[arg(long)]
    pub must_be_l: bool,

    /// Do not merge touching nouns (noun-match tokenizer)
    #[arg(long)]
    pub no_concat: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported tokenizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenizerKind {
    /// Character-class regex pipeline
    Regex,
    /// One left/right split per eojeol
    L,
    /// Greedy maximum-score cover
    MaxScore,
    /// Known nouns only
    NounMatch,
}

impl TokenizerKind {
    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Regex => "regex",
            TokenizerKind::L => "l",
            TokenizerKind::MaxScore => "max-score",
            TokenizerKind::NounMatch => "noun-match",
        }
    }
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting tokenization with the {} tokenizer", self.tokenizer.name());
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let tokenizer_config = self.tokenizer_config(&config.tokenizer)?;
        let tokenizer = self.build_tokenizer(&tokenizer_config)?;

        let mut exclude: Vec<&Path> = self.output.iter().map(PathBuf::as_path).collect();
        exclude.extend(self.scores.as_deref());
        exclude.extend(self.config.as_deref());
        let files = resolve_patterns(&self.input, &exclude)?;
        let format = self.format.unwrap_or(config.output.format);
        let mut formatter =
            create_formatter(format, self.output.as_deref(), config.output.pretty_json)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64, "lines");

        for path in &files {
            let file = path.display().to_string();
            let lines = FileReader::read_lines(path)?;
            let tokenized: Vec<TokenizedLine> = lines
                .par_iter()
                .enumerate()
                .map(|(index, line)| TokenizedLine {
                    file: file.clone(),
                    line: index + 1,
                    tokens: tokenizer.tokenize(line),
                })
                .collect();

            for line in &tokenized {
                formatter.format_line(line)?;
            }
            log::info!("{}: {} lines", file, tokenized.len());
            progress.file_read(path, tokenized.len());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Config file settings with command-line overrides applied
    fn tokenizer_config(&self, base: &TokenizerConfig) -> Result<TokenizerConfig> {
        let mut config = base.clone();
        config.remove_r |= self.remove_r;
        config.must_be_l |= self.must_be_l;
        if self.no_concat {
            config.concat_compound = false;
        }
        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn build_tokenizer(&self, config: &TokenizerConfig) -> Result<Box<dyn Tokenizer>> {
        let scores = || -> Result<WordScores> {
            let path = self.scores.as_deref().ok_or_else(|| {
                CliError::ConfigError(format!(
                    "--scores is required for the {} tokenizer",
                    self.tokenizer.name()
                ))
            })?;
            load_scores(path)
        };

        let tokenizer: Box<dyn Tokenizer> = match self.tokenizer {
            TokenizerKind::Regex if self.patterns.is_empty() => Box::new(RegexTokenizer::new()),
            TokenizerKind::Regex => Box::new(
                RegexTokenizer::with_patterns(&self.patterns)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?,
            ),
            TokenizerKind::L => Box::new(LTokenizer::with_config(scores()?, config)?),
            TokenizerKind::MaxScore => Box::new(MaxScoreTokenizer::with_config(scores()?, config)?),
            TokenizerKind::NounMatch => {
                Box::new(NounMatchTokenizer::with_config(scores()?, config)?)
            }
        };
        Ok(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(tokenizer: TokenizerKind) -> TokenizeArgs {
        TokenizeArgs {
            input: Vec::new(),
            output: None,
            format: None,
            tokenizer,
            scores: None,
            patterns: Vec::new(),
            config: None,
            remove_r: false,
            must_be_l: false,
            no_concat: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_scores_required_for_dictionary_tokenizers() {
        for kind in [
            TokenizerKind::L,
            TokenizerKind::MaxScore,
            TokenizerKind::NounMatch,
        ] {
            let error = args(kind)
                .build_tokenizer(&TokenizerConfig::default())
                .err()
                .unwrap();
            assert!(error.to_string().contains("--scores"));
        }
        assert!(args(TokenizerKind::Regex)
            .build_tokenizer(&TokenizerConfig::default())
            .is_ok());
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let mut args = args(TokenizerKind::Regex);
        args.patterns = vec!["(".to_string()];
        let error = args
            .build_tokenizer(&TokenizerConfig::default())
            .err()
            .unwrap();
        assert!(error.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = args(TokenizerKind::NounMatch);
        args.no_concat = true;
        args.must_be_l = true;
        let config = args.tokenizer_config(&TokenizerConfig::default()).unwrap();
        assert!(!config.concat_compound);
        assert!(config.must_be_l);
        assert!(!config.remove_r);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let scores = temp_dir.path().join("scores.tsv");
        let output = temp_dir.path().join("tokens.txt");
        fs::write(&input, "파스타가좋아요\n\n파스타가 좋아요\n").unwrap();
        fs::write(&scores, "파스\t0.65\n파스타\t0.7\n좋아\t0.3\n").unwrap();

        let mut args = args(TokenizerKind::MaxScore);
        args.input = vec![input.display().to_string()];
        args.scores = Some(scores);
        args.output = Some(output.clone());
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "파스타 가 좋아 요\n\n파스타 가 좋아 요\n");
    }
}
