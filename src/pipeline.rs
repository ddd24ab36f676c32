use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::info;
use wordfreq_table::{FrequencyTable, TableError};

use crate::chars::{CharsError, TargetChars};
use crate::config::Config;
use crate::convert::{ConvertError, simplified_converter};
use crate::index::{IndexBuilder, IndexError};
use crate::output::{OutputError, write_index};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Chars(#[from] CharsError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub chars_indexed: usize,
    pub chars_without_words: usize,
    pub output_path: PathBuf,
}

/// Read the inputs, build the index and write it out.
///
/// Configuration problems (bad top-N, missing converter) fail before any
/// input is read; no output file exists unless the whole run succeeds.
pub fn run(config: &Config) -> Result<RunSummary, RunError> {
    let converter = if config.convert_to_simplified {
        Some(simplified_converter()?)
    } else {
        None
    };
    let mut builder = IndexBuilder::new(config.top_n)?;
    if let Some(converter) = converter.as_deref() {
        info!("converting corpus words with {}", converter.name());
        builder = builder.with_converter(converter);
    }

    let targets = TargetChars::load(&config.chars_path)?;

    info!("reading word-frequency file: {}", config.corpus_path.display());
    let start = Instant::now();
    let table = FrequencyTable::load(&config.corpus_path, &config.table)?;
    info!(
        "total word rows read: {} in {} ms",
        table.len(),
        start.elapsed().as_millis()
    );

    info!(
        "building index for {} characters, top {} each",
        targets.len(),
        builder.top_n()
    );
    let start = Instant::now();
    let index = builder.build(&targets, table.records());
    info!("index built in {} ms", start.elapsed().as_millis());

    write_index(&index, &config.output_path)?;

    Ok(RunSummary {
        rows_read: table.len(),
        chars_indexed: index.len(),
        chars_without_words: index.without_words(),
        output_path: config.output_path.clone(),
    })
}
