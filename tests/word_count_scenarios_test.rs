use word_count_bolt::core::TopologyConf;
use word_count_bolt::{
    Bolt, BoltError, CountBolt, OutputCollector, Tuple, Value, VecCollector, WordCount,
    WordCounter,
};

fn word_tuple(word: &str) -> Tuple {
    Tuple::new(vec![Value::from(word)])
}

fn run_bolt(words: &[&str]) -> (CountBolt, Vec<WordCount>) {
    let mut bolt = CountBolt::default();
    let mut collector = VecCollector::new();
    bolt.prepare(&TopologyConf::new()).unwrap();

    for word in words {
        bolt.execute(&word_tuple(word), &mut collector).unwrap();
    }

    let emitted = collector
        .tuples()
        .iter()
        .map(|t| WordCount::try_from(t).unwrap())
        .collect();
    (bolt, emitted)
}

fn pairs(expected: &[(&str, u64)]) -> Vec<WordCount> {
    expected.iter().map(|(w, c)| WordCount::new(w, *c)).collect()
}

#[test]
fn test_interleaved_words() {
    let (_, emitted) = run_bolt(&["cat", "dog", "cat"]);
    assert_eq!(emitted, pairs(&[("cat", 1), ("dog", 1), ("cat", 2)]));
}

#[test]
fn test_single_repeated_word() {
    let (_, emitted) = run_bolt(&["a", "a", "a", "a"]);
    assert_eq!(emitted, pairs(&[("a", 1), ("a", 2), ("a", 3), ("a", 4)]));
}

#[test]
fn test_empty_input_emits_nothing() {
    let (bolt, emitted) = run_bolt(&[]);
    assert!(emitted.is_empty());
    assert!(bolt.counter().unwrap().is_empty());
}

#[test]
fn test_empty_string_is_counted_like_any_word() {
    let (_, emitted) = run_bolt(&["", ""]);
    assert_eq!(emitted, pairs(&[("", 1), ("", 2)]));
}

#[test]
fn test_whitespace_and_case_are_not_normalized() {
    let (bolt, emitted) = run_bolt(&[" ", "Cat", "cat", " "]);
    assert_eq!(emitted, pairs(&[(" ", 1), ("Cat", 1), ("cat", 1), (" ", 2)]));
    assert_eq!(bolt.counter().unwrap().len(), 3);
}

#[test]
fn test_declared_schema_is_stable() {
    let mut bolt = CountBolt::default();
    let before = bolt.declare_output_fields();
    bolt.prepare(&TopologyConf::new()).unwrap();
    bolt.execute(&word_tuple("cat"), &mut VecCollector::new()).unwrap();

    assert_eq!(before, bolt.declare_output_fields());
    assert_eq!(before, WordCounter::output_fields());
    assert_eq!(before.names(), vec!["word", "count"]);
}

#[test]
fn test_emitted_tuples_match_declared_schema() {
    let mut bolt = CountBolt::default();
    let mut collector = VecCollector::new();
    collector.declare(&bolt.declare_output_fields()).unwrap();
    bolt.prepare(&TopologyConf::new()).unwrap();
    bolt.execute(&word_tuple("naïve"), &mut collector).unwrap();

    let schema = collector.schema().unwrap();
    for tuple in collector.tuples() {
        schema.validate(tuple).unwrap();
    }
}

#[test]
fn test_missing_word_field_is_a_contract_violation() {
    let mut bolt = CountBolt::default();
    bolt.prepare(&TopologyConf::new()).unwrap();

    let err = bolt
        .execute(&Tuple::default(), &mut VecCollector::new())
        .unwrap_err();

    assert!(matches!(err, BoltError::MissingField { index: 0, arity: 0 }));
    assert!(err.recovery_suggestion().contains("string tuples"));
}

#[test]
fn test_independent_instances_do_not_share_counts() {
    let (first, _) = run_bolt(&["cat", "cat"]);
    let (second, _) = run_bolt(&["cat"]);
    assert_eq!(first.counter().unwrap().count("cat"), 2);
    assert_eq!(second.counter().unwrap().count("cat"), 1);
}
