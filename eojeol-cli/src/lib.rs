//! Eojeol CLI library
//!
//! This library provides the command-line interface for eojeol
//! tokenization and POS pattern matching.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
