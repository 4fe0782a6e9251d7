// Integration tests for the stroke matcher

use stroke_nav::{
    is_prefix_match, parse_pattern, CharacterRecord, CharacterStore, StrokeCodeTranslator,
    StrokeMatcher,
};

fn one_and_ten() -> CharacterStore {
    CharacterStore::from_json(
        r#"{
            "1": {"char": "一", "strokes": ["横"], "pinyin": "yī", "meaning": "one"},
            "2": {"char": "十", "strokes": ["横", "竖"], "pinyin": "shí", "meaning": "ten"}
        }"#,
    )
    .unwrap()
}

fn characters(store: &CharacterStore, pattern: &[&str]) -> Vec<String> {
    StrokeMatcher::default()
        .find_by_strokes(store, pattern)
        .into_iter()
        .map(|r| r.character)
        .collect()
}

// ============ Worked Example ============

#[test]
fn test_h_matches_one_and_ten() {
    assert_eq!(characters(&one_and_ten(), &["h"]), vec!["一", "十"]);
}

#[test]
fn test_h_s_matches_only_ten() {
    assert_eq!(characters(&one_and_ten(), &["h", "s"]), vec!["十"]);
}

#[test]
fn test_s_matches_nothing() {
    assert!(characters(&one_and_ten(), &["s"]).is_empty());
}

// ============ Prefix Semantics ============

#[test]
fn test_every_result_starts_with_pattern() {
    let store = CharacterStore::embedded();
    let matcher = StrokeMatcher::default();
    let translator = StrokeCodeTranslator::default();

    for query in ["h", "s", "p", "n", "z", "h s", "s z h", "p n", "z z", "h h h"] {
        let codes: Vec<&str> = query.split(' ').collect();
        let expected = translator.translate(&codes);

        let results = matcher.find_by_strokes(&store, &codes);
        for result in &results {
            assert!(
                is_prefix_match(&result.strokes, &expected),
                "{} does not start with {:?}",
                result.character,
                expected
            );
        }

        // ...and nothing that starts with the pattern is left out
        let hits = store
            .all()
            .iter()
            .filter(|r| r.stroke_sequence().is_some_and(|s| is_prefix_match(s, &expected)))
            .count();
        assert_eq!(hits, results.len(), "query {:?}", query);
    }
}

#[test]
fn test_embedded_counts() {
    let store = CharacterStore::embedded();
    assert_eq!(characters(&store, &["h"]).len(), 14);
    assert_eq!(
        characters(&store, &["h", "s"]),
        vec!["十", "木", "土", "工", "下"]
    );
    assert_eq!(
        characters(&store, &["s", "z", "h"]),
        vec!["口", "日", "目", "田", "中"]
    );
    assert_eq!(characters(&store, &["p", "n"]), vec!["人", "入", "八"]);
}

#[test]
fn test_reordered_strokes_never_match() {
    let store = CharacterStore::from_records(vec![
        CharacterRecord::new("22", "上", vec!["竖", "横", "横"], "shàng", "up"),
        CharacterRecord::new("4", "十", vec!["横", "竖"], "shí", "ten"),
    ]);
    assert_eq!(characters(&store, &["h", "s"]), vec!["十"]);
    assert_eq!(characters(&store, &["s", "h"]), vec!["上"]);
}

#[test]
fn test_pattern_longer_than_every_record() {
    let store = CharacterStore::embedded();
    assert!(characters(&store, &["h", "h", "h", "h", "h", "h"]).is_empty());
}

#[test]
fn test_empty_pattern_returns_all_with_strokes() {
    let store = CharacterStore::embedded();
    assert_eq!(characters(&store, &[]).len(), store.len());
}

#[test]
fn test_results_follow_store_order() {
    let store = CharacterStore::from_records(vec![
        CharacterRecord::new("b", "二", vec!["横", "横"], "èr", "two"),
        CharacterRecord::new("a", "一", vec!["横"], "yī", "one"),
    ]);
    assert_eq!(characters(&store, &["h"]), vec!["二", "一"]);
}

#[test]
fn test_search_does_not_mutate_store() {
    let store = CharacterStore::embedded();
    let before = store.to_json_pretty().unwrap();

    let matcher = StrokeMatcher::default();
    let first = matcher.find_by_strokes(&store, &["z"]);
    let second = matcher.find_by_strokes(&store, &["z"]);

    assert_eq!(first, second);
    assert_eq!(store.to_json_pretty().unwrap(), before);
}

// ============ Parsed Input ============

#[test]
fn test_parsed_pattern_workflow() {
    let codes = parse_pattern("H S").unwrap();
    let results = StrokeMatcher::default().find_codes(&one_and_ten(), &codes);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].character, "十");
    assert_eq!(results[0].stroke_count, 2);
}
