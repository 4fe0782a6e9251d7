// Integration tests for StrokeNavigator

use std::fs;

use stroke_nav::{CharacterRecord, CharacterStore, Config, PatternError, StrokeNavigator};

#[test]
fn test_search_creation() {
    let navigator = StrokeNavigator::embedded();
    assert!(!navigator.store().is_empty());
}

#[test]
fn test_search_ten() {
    let navigator = StrokeNavigator::embedded();
    let results = navigator.search("h s").unwrap();

    let ten = results.iter().find(|r| r.character == "十").unwrap();
    assert_eq!(ten.pinyin, "shí");
    assert_eq!(ten.meaning, "ten");
    assert_eq!(ten.stroke_count, 2);
}

#[test]
fn test_search_limit() {
    let navigator = StrokeNavigator::embedded();
    let results = navigator.search_limit("z", 2).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_invalid_query_error() {
    let navigator = StrokeNavigator::embedded();
    assert_eq!(
        navigator.search("h d"),
        Err(PatternError::InvalidCodes {
            codes: vec!["d".to_string()]
        })
    );
}

#[test]
fn test_empty_query_error() {
    let navigator = StrokeNavigator::embedded();
    assert_eq!(navigator.search("  "), Err(PatternError::EmptyPattern));
}

#[test]
fn test_from_config_reads_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("mine.json"),
        r#"{"1": {"char": "一", "strokes": ["横"], "pinyin": "yī", "meaning": "one"}}"#,
    )
    .unwrap();

    let config = Config::default()
        .with_data_dir(tmp.path())
        .with_characters_file("mine.json");
    let navigator = StrokeNavigator::from_config(&config);

    assert_eq!(navigator.search("h").unwrap().len(), 1);
    assert!(navigator.search("s").unwrap().is_empty());
}

#[test]
fn test_missing_data_still_usable() {
    let tmp = tempfile::tempdir().unwrap();
    let navigator = StrokeNavigator::from_config(&Config::default().with_data_dir(tmp.path()));

    assert!(navigator.search("h s p").unwrap().is_empty());
    assert!(navigator.stats().is_empty());
}

#[test]
fn test_validate_and_help() {
    let navigator = StrokeNavigator::embedded();
    assert!(navigator.validate().is_empty());

    let help = navigator.stroke_help();
    for line in ["h - 横", "s - 竖", "p - 撇", "n - 捺", "z - 折"] {
        assert!(help.contains(line), "guide is missing {}", line);
    }
}

#[test]
fn test_find_by_strokes_compares_unknown_codes_literally() {
    let store = CharacterStore::from_records(vec![
        CharacterRecord::new("1", "主", vec!["点", "横", "横", "竖", "横"], "zhǔ", "master"),
        CharacterRecord::new("2", "十", vec!["横", "竖"], "shí", "ten"),
    ]);
    let navigator = StrokeNavigator::new(store);

    let results = navigator.find_by_strokes(&["点", "h"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].character, "主");

    assert_eq!(navigator.find_by_strokes(&["h", "s"])[0].character, "十");
    assert!(navigator.find_by_strokes(&["d"]).is_empty());
}
