//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve corpus or count-file patterns to the files to read
///
/// Directories and empty files are skipped, as are the `exclude` paths, so a
/// broad pattern never reads back the output or lexicon files of the same
/// run. A pattern that matches nothing is only logged; the call fails when no
/// file is left at all.
pub fn resolve_patterns(patterns: &[String], exclude: &[&Path]) -> Result<Vec<PathBuf>> {
    let excluded: Vec<PathBuf> = exclude.iter().map(|path| normalized(path)).collect();
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            if excluded.contains(&normalized(&path)) {
                log::info!("skipping {}: also used as output or lexicon", path.display());
                continue;
            }
            if metadata.len() == 0 {
                log::warn!("skipping empty input {}", path.display());
                continue;
            }
            files.push(path);
        }

        if files.len() == before {
            log::warn!("pattern {pattern} matched no input");
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();
    log::debug!("{} input files", files.len());

    Ok(files)
}

/// Canonical form of `path`, or the path itself when it does not exist yet
fn normalized(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
