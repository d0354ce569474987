//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod lexicon;
pub mod word_counts;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use lexicon::{load_dictionaries, load_scores};
pub use word_counts::{count_eojeols, parse_counts};
