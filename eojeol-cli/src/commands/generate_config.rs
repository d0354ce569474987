//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use eojeol_core::TokenizerConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template(&TokenizerConfig::default());

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune the tokenizers");
        println!("2. Tokenize with it:");
        println!(
            "   eojeol tokenize -i corpus.txt -t max-score -s scores.tsv -c {}",
            self.output.display()
        );
        println!("3. Or classify eojeols with it:");
        println!(
            "   eojeol extract -i eojeols.tsv -d dictionaries.json -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template content with `defaults` filled in
fn generate_template(defaults: &TokenizerConfig) -> String {
    format!(
        r#"# eojeol configuration

[tokenizer]
# Longest candidate word, in characters (max-score, noun-match)
max_length = {}

# Score given to substrings missing from the score table (max-score)
unknown_score = {:?}

# Prefer the longest left part scoring within this distance of the best (l)
tolerance = {:?}

# Emit only the left part of every eojeol (l)
remove_r = {}

# Merge nouns that touch into one compound (noun-match)
concat_compound = {}

# Keep only nouns that start their eojeol (noun-match)
must_be_l = {}

[output]
# "text" or "json"
format = "text"

# Indent JSON output
pretty_json = true
"#,
        defaults.max_length,
        defaults.unknown_score,
        defaults.tolerance,
        defaults.remove_r,
        defaults.concat_compound,
        defaults.must_be_l,
    )
}
