use calamine::Data;
use wordfreq_types::{coerce_frequency, frequency_from_f64, looks_numeric};

/// A single table cell, independent of the file format it came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Build a cell from delimited-file text; blank text is [`Cell::Empty`].
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric cells, and text that parses as a number.
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Int(_) | Cell::Float(_) => true,
            Cell::Text(text) => looks_numeric(text),
        }
    }

    /// Stringified, trimmed cell content. Integral floats drop the `.0`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) if v.fract() == 0.0 && v.is_finite() => format!("{v:.0}"),
            Cell::Float(v) => v.to_string(),
            Cell::Text(text) => text.trim().to_string(),
        }
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Cell::Empty => 0,
            Cell::Int(v) => u64::try_from(*v).unwrap_or(0),
            Cell::Float(v) => frequency_from_f64(*v),
            Cell::Text(text) => coerce_frequency(text),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::Int(v) => Cell::Int(*v),
            Data::Float(v) => Cell::Float(*v),
            Data::String(s) => Cell::from_text(s),
            Data::Bool(b) => Cell::Text(b.to_string()),
            other => Cell::from_text(&other.to_string()),
        }
    }
}
