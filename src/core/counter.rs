use crate::core::{Field, FieldType, Fields, WordCount};
use std::collections::HashMap;

/// Running per-word occurrence counts for one ordered stream of words.
///
/// Every key present in the map has a count of at least 1; a word that was never
/// processed has an implicit count of 0. Increments saturate at `u64::MAX`.
///
/// Not internally synchronized: `process` takes `&mut self`, so one instance handles
/// one stream at a time. Parallel deployments give each instance its own counter.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: HashMap<String, u64>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Increments the count for `word` and returns the pair with the updated count.
    ///
    /// Any string is a valid word, including the empty string.
    pub fn process(&mut self, word: &str) -> WordCount {
        let count = match self.counts.get_mut(word) {
            Some(count) => {
                *count = count.saturating_add(1);
                *count
            }
            None => {
                self.counts.insert(word.to_string(), 1);
                1
            }
        };

        WordCount::new(word, count)
    }

    /// The fixed output schema: `word` (string), `count` (unsigned integer).
    pub fn output_fields() -> Fields {
        Fields::new(vec![
            Field::new("word", FieldType::String),
            Field::new("count", FieldType::UnsignedInteger),
        ])
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// All counts, highest first, ties broken by word.
    pub fn snapshot(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, count)| WordCount::new(word, *count))
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }

    #[cfg(test)]
    pub(crate) fn with_count(word: &str, count: u64) -> Self {
        let mut counter = Self::new();
        counter.counts.insert(word.to_string(), count);
        counter
    }
}
