//! Progress reporting for corpus and count-file reading

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress bar over input files, counting the lines or eojeols read
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    unit: &'static str,
    items: u64,
}

impl ProgressReporter {
    /// Create a reporter; `quiet` disables all drawing
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            unit: "lines",
            items: 0,
        }
    }

    /// Start a bar over `total_files` inputs whose contents are counted in `unit`
    pub fn start(&mut self, total_files: u64, unit: &'static str) {
        self.unit = unit;
        self.items = 0;
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("falling back to the default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one input file holding `items` lines or eojeols
    pub fn file_read(&mut self, path: &Path, items: usize) {
        self.items += items as u64;
        if let Some(pb) = &self.progress_bar {
            let name = path.file_name().unwrap_or(path.as_os_str());
            pb.set_message(format!(
                "{}: {items} {} ({} total)",
                name.to_string_lossy(),
                self.unit,
                self.items
            ));
            pb.inc(1);
        }
    }

    /// Announce the POS pipeline over `unique` distinct eojeols
    pub fn extracting(&self, unique: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("classifying {unique} unique eojeols"));
        }
    }

    /// Lines or eojeols read so far
    pub fn items(&self) -> u64 {
        self.items
    }

    /// Finish the bar with the totals
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} {} read", self.items, self.unit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_still_counts() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start(2, "eojeols");
        assert!(reporter.progress_bar.is_none());
        reporter.file_read(Path::new("a.tsv"), 3);
        reporter.file_read(Path::new("b.tsv"), 4);
        reporter.finish();
        assert_eq!(reporter.items(), 7);
    }

    #[test]
    fn test_reporter_advances_per_file() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start(2, "lines");
        reporter.file_read(Path::new("말뭉치/뉴스.txt"), 10);
        reporter.extracting(5);
        let position = reporter.progress_bar.as_ref().map(ProgressBar::position);
        assert_eq!(position, Some(1));
        assert_eq!(reporter.items(), 10);
        reporter.finish();
    }

    #[test]
    fn test_start_resets_totals() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start(1, "lines");
        reporter.file_read(Path::new("a.txt"), 2);
        reporter.start(1, "eojeols");
        assert_eq!(reporter.items(), 0);
    }
}
