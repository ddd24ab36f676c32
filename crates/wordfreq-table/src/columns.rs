//! Column identification for tables whose layout is only loosely known.

use wordfreq_types::{
    ColumnPlan, ColumnSource, FREQ_COLUMN_GUESSES, FreqColumn, WORD_COLUMN_GUESSES,
};

use crate::TableError;

/// Explicit column names that bypass the header heuristics.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnOverrides<'a> {
    pub word: Option<&'a str>,
    pub freq: Option<&'a str>,
}

/// Pick the word and frequency columns from a trimmed header row.
///
/// Word: override, else the first matching candidate header, else column 0.
/// Frequency: override, else the first matching candidate header, else
/// column 1 when `second_is_numeric`, else presence-only.
pub fn resolve_columns(
    headers: &[String],
    overrides: ColumnOverrides<'_>,
    second_is_numeric: bool,
) -> Result<ColumnPlan, TableError> {
    if headers.is_empty() {
        return Err(TableError::NoColumns { found: Vec::new() });
    }

    let (word, word_source) = match overrides.word {
        Some(name) => (find_override(headers, "word", name)?, ColumnSource::Override),
        None => match find_guess(headers, WORD_COLUMN_GUESSES) {
            Some(idx) => (idx, ColumnSource::Header),
            None => (0, ColumnSource::Positional),
        },
    };

    let freq = match overrides.freq {
        Some(name) => FreqColumn::Column {
            index: find_override(headers, "frequency", name)?,
            source: ColumnSource::Override,
        },
        None => match find_guess(headers, FREQ_COLUMN_GUESSES) {
            Some(index) => FreqColumn::Column {
                index,
                source: ColumnSource::Header,
            },
            None if headers.len() > 1 && second_is_numeric => FreqColumn::Column {
                index: 1,
                source: ColumnSource::Positional,
            },
            None => FreqColumn::PresenceOnly,
        },
    };

    Ok(ColumnPlan {
        word,
        word_source,
        freq,
    })
}

fn find_guess(headers: &[String], guesses: &[&str]) -> Option<usize> {
    guesses
        .iter()
        .find_map(|guess| headers.iter().position(|h| h == guess))
}

fn find_override(headers: &[String], role: &'static str, name: &str) -> Result<usize, TableError> {
    let name = name.trim();
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TableError::ColumnNotFound {
            role,
            name: name.to_string(),
            found: headers.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_subtlex_headers() {
        let plan = resolve_columns(
            &headers(&["Word", "WCount", "W/million", "logW"]),
            ColumnOverrides::default(),
            true,
        )
        .unwrap();
        assert_eq!(plan.word, 0);
        assert_eq!(plan.word_source, ColumnSource::Header);
        assert_eq!(
            plan.freq,
            FreqColumn::Column {
                index: 1,
                source: ColumnSource::Header
            }
        );
    }

    #[test]
    fn guess_order_beats_column_order() {
        let plan = resolve_columns(
            &headers(&["token", "Count", "word", "Freq"]),
            ColumnOverrides::default(),
            true,
        )
        .unwrap();
        assert_eq!(plan.word, 2);
        assert_eq!(
            plan.freq,
            FreqColumn::Column {
                index: 3,
                source: ColumnSource::Header
            }
        );
    }

    #[test]
    fn header_match_is_case_sensitive() {
        let plan =
            resolve_columns(&headers(&["WORD", "FREQ"]), ColumnOverrides::default(), false).unwrap();
        assert_eq!(plan.word, 0);
        assert_eq!(plan.word_source, ColumnSource::Positional);
        assert_eq!(plan.freq, FreqColumn::PresenceOnly);
    }

    #[test]
    fn numeric_second_column_is_frequency() {
        let plan =
            resolve_columns(&headers(&["词语", "次数"]), ColumnOverrides::default(), true).unwrap();
        assert_eq!(
            plan.freq,
            FreqColumn::Column {
                index: 1,
                source: ColumnSource::Positional
            }
        );
    }

    #[test]
    fn single_column_is_presence_only() {
        let plan = resolve_columns(&headers(&["Word"]), ColumnOverrides::default(), true).unwrap();
        assert_eq!(plan.freq, FreqColumn::PresenceOnly);
    }

    #[test]
    fn overrides_take_precedence() {
        let plan = resolve_columns(
            &headers(&["Word", "WCount", "CHR"]),
            ColumnOverrides {
                word: Some("CHR"),
                freq: Some("WCount"),
            },
            false,
        )
        .unwrap();
        assert_eq!(plan.word, 2);
        assert_eq!(plan.word_source, ColumnSource::Override);
        assert_eq!(
            plan.freq,
            FreqColumn::Column {
                index: 1,
                source: ColumnSource::Override
            }
        );
    }

    #[test]
    fn missing_override_names_found_columns() {
        let err = resolve_columns(
            &headers(&["Word", "WCount"]),
            ColumnOverrides {
                word: None,
                freq: Some("Hits"),
            },
            true,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Hits"));
        assert!(message.contains("WCount"));
    }

    #[test]
    fn empty_header_is_fatal() {
        let err = resolve_columns(&[], ColumnOverrides::default(), false).unwrap_err();
        assert!(matches!(err, TableError::NoColumns { .. }));
    }
}
