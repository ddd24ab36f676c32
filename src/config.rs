use std::path::PathBuf;

use wordfreq_table::ReadOptions;

use crate::index::DEFAULT_TOP_N;

pub const DEFAULT_OUTPUT: &str = "char_index.json";

/// Everything a single index build needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub chars_path: PathBuf,
    pub corpus_path: PathBuf,
    pub output_path: PathBuf,
    pub top_n: usize,
    pub convert_to_simplified: bool,
    pub table: ReadOptions,
}

impl Config {
    /// Defaults for everything except the two required inputs.
    pub fn new(chars_path: impl Into<PathBuf>, corpus_path: impl Into<PathBuf>) -> Self {
        Self {
            chars_path: chars_path.into(),
            corpus_path: corpus_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            top_n: DEFAULT_TOP_N,
            convert_to_simplified: false,
            table: ReadOptions::default(),
        }
    }
}
