//! Read word-frequency corpora into canonical `(word, frequency)` records.
//!
//! Corpora such as SUBTLEX-CH ship as spreadsheets with a couple of metadata
//! rows above the real header, and column names vary between releases and
//! derived exports. [`FrequencyTable::load`] handles that uniformly:
//!
//! - skips a fixed number of leading rows ([`ReadOptions::skip_rows`]),
//! - resolves the word and frequency columns from the header row (see
//!   [`resolve_columns`]), honouring explicit overrides,
//! - coerces frequency cells to integers, mapping anything unparseable to 0.
//!
//! Records come back in source row order, neither deduplicated nor sorted.
//!
//! # Example
//! ```no_run
//! use wordfreq_table::{FrequencyTable, ReadOptions};
//!
//! # fn main() -> Result<(), wordfreq_table::TableError> {
//! let table = FrequencyTable::load("SUBTLEX-CH-WF.xlsx", &ReadOptions::default())?;
//! println!("{} rows, plan {:?}", table.len(), table.plan());
//! for record in table.records().take(5) {
//!     println!("{}\t{}", record.word, record.freq);
//! }
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p wordfreq-table --example inspect -- <file>`.

mod cell;
mod columns;
mod source;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use wordfreq_types::{ColumnPlan, ColumnSource, FreqColumn, FrequencyRecord, PRESENCE_FREQ};

pub use cell::Cell;
pub use columns::{ColumnOverrides, resolve_columns};
pub use source::TableFormat;

/// Metadata rows above the header in SUBTLEX-CH-WF.
pub const DEFAULT_SKIP_ROWS: usize = 2;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("frequency table not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported table format {extension:?} for {}; expected xlsx, xlsm, xlsb, xls, ods, csv, tsv or txt", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
    #[error("failed to read spreadsheet {}: {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to read delimited file {}: {source}", .path.display())]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("spreadsheet {} has no worksheets", .0.display())]
    NoSheets(PathBuf),
    #[error("worksheet {name:?} not found in {}; available: {available:?}", .path.display())]
    SheetNotFound {
        path: PathBuf,
        name: String,
        available: Vec<String>,
    },
    #[error("no identifiable columns in frequency table; columns found: {found:?}")]
    NoColumns { found: Vec<String> },
    #[error("{role} column {name:?} not found; columns found: {found:?}")]
    ColumnNotFound {
        role: &'static str,
        name: String,
        found: Vec<String>,
    },
}

/// Knobs for [`FrequencyTable::load`].
#[derive(Clone, Debug)]
pub struct ReadOptions {
    /// Rows dropped before the header row.
    pub skip_rows: usize,
    pub word_column: Option<String>,
    pub freq_column: Option<String>,
    /// Worksheet name; the first sheet when unset. Ignored for delimited files.
    pub sheet: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip_rows: DEFAULT_SKIP_ROWS,
            word_column: None,
            freq_column: None,
            sheet: None,
        }
    }
}

/// A loaded frequency table with its columns resolved.
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    plan: ColumnPlan,
}

impl FrequencyTable {
    /// Load a table from disk, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self, TableError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TableError::NotFound(path.to_path_buf()));
        }

        let raw = match TableFormat::from_path(path)? {
            TableFormat::Spreadsheet => source::read_spreadsheet(path, options.sheet.as_deref())?,
            TableFormat::Delimited {
                delimiter,
                quoting,
            } => source::read_delimited(path, delimiter, quoting)?,
        };
        Self::from_rows(raw, options)
    }

    /// Build a table from raw rows, including the rows to be skipped.
    pub fn from_rows(raw: Vec<Vec<Cell>>, options: &ReadOptions) -> Result<Self, TableError> {
        let mut rows = raw.into_iter().skip(options.skip_rows);
        let headers: Vec<String> = rows
            .next()
            .map(|header| header.iter().map(Cell::to_text).collect())
            .unwrap_or_default();
        let rows: Vec<Vec<Cell>> = rows.collect();

        let second_is_numeric = column_is_numeric(&rows, 1);
        let plan = resolve_columns(
            &headers,
            ColumnOverrides {
                word: options.word_column.as_deref(),
                freq: options.freq_column.as_deref(),
            },
            second_is_numeric,
        )?;

        if plan.word_source == ColumnSource::Positional {
            warn!(
                "no known word column header; using first column {:?} (columns found: {:?})",
                headers[plan.word], headers
            );
        }
        match plan.freq {
            FreqColumn::PresenceOnly => warn!(
                "no frequency column found; every word counts as {PRESENCE_FREQ} (columns found: {:?})",
                headers
            ),
            FreqColumn::Column {
                index,
                source: ColumnSource::Positional,
            } => warn!(
                "no known frequency column header; using numeric column {:?} (columns found: {:?})",
                headers[index], headers
            ),
            FreqColumn::Column { .. } => {}
        }

        Ok(Self {
            headers,
            rows,
            plan,
        })
    }

    /// Trimmed header names, in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn plan(&self) -> ColumnPlan {
        self.plan
    }

    /// Number of data rows (header and skipped rows excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Canonical records in source row order. Words may be empty.
    pub fn records(&self) -> impl Iterator<Item = FrequencyRecord> + '_ {
        self.rows.iter().map(move |row| self.record(row))
    }

    fn record(&self, row: &[Cell]) -> FrequencyRecord {
        let word = row.get(self.plan.word).map(Cell::to_text).unwrap_or_default();
        let freq = match self.plan.freq {
            FreqColumn::Column { index, .. } => row.get(index).map(Cell::frequency).unwrap_or(0),
            FreqColumn::PresenceOnly => PRESENCE_FREQ,
        };
        FrequencyRecord { word, freq }
    }
}

/// True unless the column holds a non-blank, non-numeric value. A column
/// with no values at all counts as numeric.
fn column_is_numeric(rows: &[Vec<Cell>], index: usize) -> bool {
    rows.iter()
        .filter_map(|row| row.get(index))
        .all(|cell| cell.is_empty() || cell.is_numeric())
}
