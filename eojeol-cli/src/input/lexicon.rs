//! Dictionary and word-score files

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use eojeol_core::{Dictionaries, WordScores};
use std::path::Path;

/// Load dictionaries from a JSON document
pub fn load_dictionaries(path: &Path) -> Result<Dictionaries> {
    let text = FileReader::read_text(path)?;
    let dictionaries: Dictionaries = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse dictionaries: {}", path.display()))?;

    log::info!(
        "loaded {} nouns, {} adjectives, {} verbs, {} josas, {} eomis from {}",
        dictionaries.nouns.len(),
        dictionaries.adjectives.len(),
        dictionaries.verbs.len(),
        dictionaries.josas.len(),
        dictionaries.eomis.len(),
        path.display()
    );
    Ok(dictionaries)
}

/// Load word scores from a `.json` object or a `word<TAB>score` file
pub fn load_scores(path: &Path) -> Result<WordScores> {
    let text = FileReader::read_text(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let scores = if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse word scores: {}", path.display()))?
    } else {
        parse_score_lines(&text, path)?
    };

    log::info!("loaded {} scored words from {}", scores.len(), path.display());
    Ok(scores)
}

fn parse_score_lines(text: &str, path: &Path) -> Result<WordScores> {
    let mut scores = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |reason: String| CliError::ParseError {
            path: path.display().to_string(),
            line: index + 1,
            reason,
        };

        let (word, score) = line
            .split_once('\t')
            .ok_or_else(|| parse_error("expected word<TAB>score".to_string()))?;
        let score: f64 = score
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("invalid score {:?}: {e}", score.trim())))?;
        if !score.is_finite() {
            return Err(parse_error(format!("score must be finite, got {score}")).into());
        }
        scores.push((word.trim().to_string(), score));
    }
    Ok(scores.into_iter().collect())
}
