//! Shared types for word-frequency tables.
//!
//! A frequency table is any tabular corpus (SUBTLEX-CH, a CSV export, ...)
//! that lists words alongside a count. Readers normalize such tables into
//! [`FrequencyRecord`]s; [`ColumnPlan`] records which columns were picked to
//! do so and why.
//!
//! ```rust
//! use wordfreq_types::{FrequencyRecord, coerce_frequency};
//!
//! let record = FrequencyRecord::new("爱心", coerce_frequency(" 12.7 "));
//! assert_eq!(record.freq, 12);
//! assert_eq!(coerce_frequency("n/a"), 0);
//! ```

use std::fmt;

/// Header names tried, in order, when looking for the word column.
pub const WORD_COLUMN_GUESSES: &[&str] = &["Word", "word", "wordform", "WordForm", "w", "token"];

/// Header names tried, in order, when looking for the frequency column.
pub const FREQ_COLUMN_GUESSES: &[&str] = &[
    "WCount",
    "Freq",
    "freq",
    "Frequency",
    "frequency",
    "FreqCount",
    "Count",
];

/// Frequency assigned to every row when the table has no usable frequency column.
pub const PRESENCE_FREQ: u64 = 1;

/// One `(word, frequency)` row of a corpus.
///
/// `word` is trimmed but may be empty; duplicates are kept as-is.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrequencyRecord {
    pub word: String,
    pub freq: u64,
}

impl FrequencyRecord {
    pub fn new(word: impl Into<String>, freq: u64) -> Self {
        Self {
            word: word.into(),
            freq,
        }
    }
}

/// How a column was identified.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnSource {
    /// Named explicitly by the caller.
    Override,
    /// Matched one of the candidate header names.
    Header,
    /// Picked by position because no header matched.
    Positional,
}

impl fmt::Display for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnSource::Override => "override",
            ColumnSource::Header => "header",
            ColumnSource::Positional => "positional fallback",
        })
    }
}

/// Where record frequencies are read from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FreqColumn {
    Column { index: usize, source: ColumnSource },
    /// No frequency column; every row counts as [`PRESENCE_FREQ`].
    PresenceOnly,
}

/// Resolved column identity for a table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnPlan {
    pub word: usize,
    pub word_source: ColumnSource,
    pub freq: FreqColumn,
}

/// Convert a numeric cell into a frequency: truncated toward zero, with
/// negative and non-finite values mapped to 0.
pub fn frequency_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

/// Coerce a text cell into a frequency. Anything unparseable becomes 0.
pub fn coerce_frequency(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return value;
    }
    trimmed.parse::<f64>().map(frequency_from_f64).unwrap_or(0)
}

/// Whether a text cell would be read as a number.
pub fn looks_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}
