//! Eojeol frequency tables from count files or raw text

use crate::error::CliError;
use anyhow::Result;
use eojeol_core::pos::FrequencyTable;
use std::path::Path;

/// Parse `eojeol<TAB>count` lines into `counts`
///
/// Blank lines and lines starting with `#` are skipped. Repeated eojeols
/// accumulate.
pub fn parse_counts(text: &str, path: &Path, counts: &mut FrequencyTable) -> Result<()> {
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

        let (eojeol, count) = line
            .split_once('\t')
            .ok_or_else(|| parse_error("expected eojeol<TAB>count".to_string()))?;
        let eojeol = eojeol.trim();
        if eojeol.is_empty() {
            return Err(parse_error("empty eojeol".to_string()).into());
        }
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("invalid count {:?}: {e}", count.trim())))?;

        *counts.entry(eojeol.to_string()).or_insert(0) += count;
    }
    Ok(())
}

/// Count whitespace-separated eojeols of raw text into `counts`
pub fn count_eojeols(text: &str, counts: &mut FrequencyTable) {
    for eojeol in text.split_whitespace() {
        *counts.entry(eojeol.to_string()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        let text = "# eojeol\tcount\n사과가\t3\n\n먹었다\t2\n사과가\t1\n";
        let mut counts = FrequencyTable::new();
        parse_counts(text, Path::new("counts.tsv"), &mut counts).unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["사과가"], 4);
        assert_eq!(counts["먹었다"], 2);
    }

    #[test]
    fn test_parse_counts_windows_line_endings() {
        let mut counts = FrequencyTable::new();
        parse_counts("학교\t5\r\n", Path::new("counts.tsv"), &mut counts).unwrap();
        assert_eq!(counts["학교"], 5);
    }

    #[test]
    fn test_parse_counts_reports_line() {
        let mut counts = FrequencyTable::new();
        let error = parse_counts("사과\t1\n주스\tmany\n", Path::new("bad.tsv"), &mut counts)
            .unwrap_err();

        match error.downcast_ref::<CliError>() {
            Some(CliError::ParseError { path, line, .. }) => {
                assert_eq!(path, "bad.tsv");
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_counts_requires_tab() {
        let mut counts = FrequencyTable::new();
        let error = parse_counts("사과 1\n", Path::new("bad.tsv"), &mut counts).unwrap_err();
        assert!(error.to_string().contains("eojeol<TAB>count"));
    }

    #[test]
    fn test_count_eojeols() {
        let mut counts = FrequencyTable::new();
        count_eojeols("파스타가 좋아요\n파스타가  정말\t좋아요", &mut counts);
        assert_eq!(counts["파스타가"], 2);
        assert_eq!(counts["좋아요"], 2);
        assert_eq!(counts["정말"], 1);
    }
}
