use proptest::prelude::*;
use std::collections::HashMap;
use word_count_bolt::{WordCount, WordCounter};

fn words() -> impl Strategy<Value = Vec<String>> {
    // A small alphabet keeps repeats frequent.
    prop::collection::vec(prop::sample::select(vec!["", "a", "b", "cat", "ü", " "]), 0..64)
        .prop_map(|ws| ws.into_iter().map(String::from).collect())
}

fn replay(input: &[String]) -> Vec<WordCount> {
    let mut counter = WordCounter::new();
    input.iter().map(|w| counter.process(w)).collect()
}

proptest! {
    #[test]
    fn counts_step_by_one_per_word(input in words()) {
        let mut last_seen: HashMap<String, u64> = HashMap::new();
        for record in replay(&input) {
            let previous = last_seen.insert(record.word.clone(), record.count).unwrap_or(0);
            prop_assert_eq!(record.count, previous + 1);
        }
    }

    #[test]
    fn processing_one_word_leaves_others_unchanged(input in words(), extra in "[a-z]{0,3}") {
        let mut counter = WordCounter::new();
        for w in &input {
            counter.process(w);
        }
        let before: HashMap<String, u64> =
            counter.iter().map(|(w, c)| (w.to_string(), c)).collect();

        counter.process(&extra);

        for (word, count) in &before {
            if *word != extra {
                prop_assert_eq!(counter.count(word), *count);
            }
        }
        prop_assert_eq!(counter.count(&extra), before.get(&extra).copied().unwrap_or(0) + 1);
    }

    #[test]
    fn replay_is_deterministic(input in words()) {
        prop_assert_eq!(replay(&input), replay(&input));
    }

    #[test]
    fn final_counts_match_occurrences(input in words()) {
        let mut counter = WordCounter::new();
        for w in &input {
            counter.process(w);
        }
        for (word, count) in counter.iter() {
            prop_assert!(count >= 1);
            let occurrences = input.iter().filter(|w| w.as_str() == word).count() as u64;
            prop_assert_eq!(count, occurrences);
        }
    }
}
