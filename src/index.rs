use std::cmp::Ordering;
use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;
use wordfreq_types::FrequencyRecord;

use crate::chars::TargetChars;
use crate::convert::ScriptConverter;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("top-N must be at least 1, got {0}")]
    InvalidTopN(usize),
}

/// Character to example words, most frequent first.
///
/// Every target character has an entry, possibly empty, in target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharIndex {
    entries: Vec<(char, Vec<String>)>,
    positions: HashMap<char, usize>,
}

impl CharIndex {
    fn from_entries(entries: Vec<(char, Vec<String>)>) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, (c, _))| (*c, pos))
            .collect();
        Self { entries, positions }
    }

    /// Example words for `c`, or `None` if `c` was not a target.
    pub fn get(&self, c: char) -> Option<&[String]> {
        self.positions
            .get(&c)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> + '_ {
        self.entries.iter().map(|(c, words)| (*c, words.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of characters no corpus word matched.
    pub fn without_words(&self) -> usize {
        self.entries.iter().filter(|(_, w)| w.is_empty()).count()
    }
}

/// Aggregates corpus records into a [`CharIndex`].
///
/// A word's weight for a character is the highest frequency seen for it on
/// any row, so duplicate rows never add up. Ties rank by word, ascending.
pub struct IndexBuilder<'a> {
    top_n: usize,
    converter: Option<&'a dyn ScriptConverter>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(top_n: usize) -> Result<Self, IndexError> {
        if top_n == 0 {
            return Err(IndexError::InvalidTopN(top_n));
        }
        Ok(Self {
            top_n,
            converter: None,
        })
    }

    /// Run every corpus word through `converter` before aggregating.
    pub fn with_converter(mut self, converter: &'a dyn ScriptConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn build<I>(&self, targets: &TargetChars, records: I) -> CharIndex
    where
        I: IntoIterator<Item = FrequencyRecord>,
    {
        let mut by_char: HashMap<char, HashMap<String, u64>> = HashMap::new();
        let mut hits: Vec<char> = Vec::new();

        for FrequencyRecord { word, freq } in records {
            let word = match self.converter {
                Some(converter) => converter.convert(&word),
                None => word,
            };
            if word.is_empty() {
                continue;
            }

            hits.clear();
            hits.extend(word.chars().filter(|c| targets.contains(*c)));
            hits.sort_unstable();
            hits.dedup();

            for &c in &hits {
                let words = by_char.entry(c).or_default();
                match words.get_mut(word.as_str()) {
                    Some(best) => *best = (*best).max(freq),
                    None => {
                        words.insert(word.clone(), freq);
                    }
                }
            }
        }

        debug!(
            "aggregated {} (character, word) pairs across {} characters",
            by_char.values().map(HashMap::len).sum::<usize>(),
            by_char.len()
        );

        let entries = targets
            .iter()
            .map(|c| {
                let words = by_char.remove(&c).map(|w| self.rank(w)).unwrap_or_default();
                (c, words)
            })
            .collect();
        CharIndex::from_entries(entries)
    }

    fn rank(&self, words: HashMap<String, u64>) -> Vec<String> {
        let mut ranked: Vec<(String, u64)> = words.into_iter().collect();
        if ranked.len() > self.top_n {
            ranked.select_nth_unstable_by(self.top_n - 1, by_rank);
            ranked.truncate(self.top_n);
        }
        ranked.sort_unstable_by(by_rank);
        ranked.into_iter().map(|(word, _)| word).collect()
    }
}

fn by_rank(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, u64)]) -> Vec<FrequencyRecord> {
        rows.iter()
            .map(|(w, f)| FrequencyRecord::new(*w, *f))
            .collect()
    }

    fn targets(chars: &str) -> TargetChars {
        chars.chars().collect()
    }

    #[test]
    fn ranks_by_frequency_and_truncates() {
        let builder = IndexBuilder::new(2).unwrap();
        let index = builder.build(
            &targets("爱"),
            records(&[("爱", 10), ("爱心", 5), ("恋爱", 8)]),
        );
        assert_eq!(index.get('爱').unwrap(), &["爱", "恋爱"]);
    }

    #[test]
    fn unmatched_characters_get_empty_lists() {
        let builder = IndexBuilder::new(3).unwrap();
        let index = builder.build(&targets("爱龘"), records(&[("爱", 1)]));
        assert_eq!(index.len(), 2);
        assert!(index.get('龘').unwrap().is_empty());
        assert_eq!(index.without_words(), 1);
        assert!(index.get('x').is_none());
    }

    #[test]
    fn ties_break_lexicographically() {
        let builder = IndexBuilder::new(3).unwrap();
        let index = builder.build(&targets("心"), records(&[("心情", 7), ("安心", 7)]));
        assert_eq!(index.get('心').unwrap(), &["安心", "心情"]);
    }

    #[test]
    fn duplicates_take_maximum_not_sum() {
        let builder = IndexBuilder::new(2).unwrap();
        let index = builder.build(
            &targets("心"),
            records(&[("开心", 4), ("开心", 4), ("开心", 4), ("心情", 6)]),
        );
        assert_eq!(index.get('心').unwrap(), &["心情", "开心"]);

        let index = builder.build(&targets("心"), records(&[("开心", 4), ("开心", 9), ("心情", 6)]));
        assert_eq!(index.get('心').unwrap(), &["开心", "心情"]);
    }

    #[test]
    fn zero_frequency_words_still_rank_last() {
        let builder = IndexBuilder::new(3).unwrap();
        let index = builder.build(&targets("心"), records(&[("心情", 0), ("开心", 2)]));
        assert_eq!(index.get('心').unwrap(), &["开心", "心情"]);
    }

    #[test]
    fn repeated_character_counts_once_per_word() {
        let builder = IndexBuilder::new(3).unwrap();
        let index = builder.build(&targets("谢"), records(&[("谢谢", 3), ("感谢", 2)]));
        assert_eq!(index.get('谢').unwrap(), &["谢谢", "感谢"]);
    }

    #[test]
    fn word_competes_per_character() {
        let builder = IndexBuilder::new(1).unwrap();
        let index = builder.build(
            &targets("安心"),
            records(&[("安心", 5), ("安全", 9), ("心", 2)]),
        );
        assert_eq!(index.get('安').unwrap(), &["安全"]);
        assert_eq!(index.get('心').unwrap(), &["安心"]);
    }

    #[test]
    fn skips_empty_words_and_keeps_target_order() {
        let builder = IndexBuilder::new(3).unwrap();
        let index = builder.build(&targets("心爱"), records(&[("", 100), ("爱心", 1)]));
        let order: Vec<char> = index.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['心', '爱']);
        assert_eq!(index.get('爱').unwrap(), &["爱心"]);
    }

    #[test]
    fn rejects_zero_top_n() {
        assert!(matches!(IndexBuilder::new(0), Err(IndexError::InvalidTopN(0))));
    }

    struct Upper;

    impl ScriptConverter for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn convert(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn converts_words_before_aggregating() {
        let converter = Upper;
        let builder = IndexBuilder::new(3).unwrap().with_converter(&converter);
        let index = builder.build(&targets("A"), records(&[("ab", 2), ("AB", 5), ("ca", 1)]));
        assert_eq!(index.get('A').unwrap(), &["AB", "CA"]);
    }

    #[test]
    fn index_properties_hold_on_larger_input() {
        let rows: Vec<FrequencyRecord> = (0..200u64)
            .map(|i| {
                let word: String = ['一', '二', '三', '四', '五']
                    .iter()
                    .cycle()
                    .skip(i as usize % 5)
                    .take(1 + (i as usize % 3))
                    .collect();
                FrequencyRecord::new(format!("{word}{}", i % 7), i % 11)
            })
            .collect();
        let builder = IndexBuilder::new(4).unwrap();
        let index = builder.build(&targets("一三五七"), rows.clone());

        for (c, words) in index.iter() {
            assert!(words.len() <= 4);
            assert!(words.iter().all(|w| w.contains(c)));
            let best: HashMap<&str, u64> = rows
                .iter()
                .filter(|r| r.word.contains(c))
                .fold(HashMap::new(), |mut acc, r| {
                    let slot = acc.entry(r.word.as_str()).or_insert(0);
                    *slot = (*slot).max(r.freq);
                    acc
                });
            for pair in words.windows(2) {
                let (a, b) = (best[pair[0].as_str()], best[pair[1].as_str()]);
                assert!(a > b || (a == b && pair[0] < pair[1]));
            }
        }
        assert!(index.get('七').unwrap().is_empty());
        assert_eq!(index, builder.build(&targets("一三五七"), rows));
    }
}
