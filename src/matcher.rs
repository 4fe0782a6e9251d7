// Stroke Navigator Matcher
// Filters the dictionary by stroke-sequence prefix

use crate::store::{CharacterRecord, CharacterStore};
use crate::translator::StrokeCodeTranslator;
use crate::types::{SearchResult, StrokeCode};

/// Prefix matcher over a [`CharacterStore`]
///
/// Order matters: `[h, s]` matches 十 (横 竖) but never a character starting
/// 竖 横. Results keep the store's order; there is no ranking.
#[derive(Debug, Clone, Default)]
pub struct StrokeMatcher {
    translator: StrokeCodeTranslator,
}

impl StrokeMatcher {
    /// Create a matcher using the given translator
    pub fn new(translator: StrokeCodeTranslator) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &StrokeCodeTranslator {
        &self.translator
    }

    /// Find every character whose stroke sequence starts with `pattern`
    ///
    /// # Arguments
    /// * `store` - The dictionary to scan
    /// * `pattern` - Stroke codes (e.g., `["h", "s"]`)
    ///
    /// # Returns
    /// Matching characters in store order. An empty pattern matches every
    /// record that has a stroke list; records without one are skipped.
    ///
    /// # Example
    /// ```
    /// # use stroke_nav::{CharacterRecord, CharacterStore, StrokeMatcher};
    /// let store = CharacterStore::from_records(vec![
    ///     CharacterRecord::new("1", "一", vec!["横"], "yī", "one"),
    ///     CharacterRecord::new("2", "十", vec!["横", "竖"], "shí", "ten"),
    /// ]);
    /// let matcher = StrokeMatcher::default();
    /// assert_eq!(matcher.find_by_strokes(&store, &["h"]).len(), 2);
    /// assert_eq!(matcher.find_by_strokes(&store, &["h", "s"])[0].character, "十");
    /// assert!(matcher.find_by_strokes(&store, &["s"]).is_empty());
    /// ```
    pub fn find_by_strokes<S: AsRef<str>>(
        &self,
        store: &CharacterStore,
        pattern: &[S],
    ) -> Vec<SearchResult> {
        let translated = self.translator.translate(pattern);

        let results: Vec<SearchResult> = store
            .all()
            .iter()
            .filter_map(|record| {
                let strokes = record.stroke_sequence()?;
                is_prefix_match(strokes, &translated).then(|| to_result(record, strokes))
            })
            .collect();

        tracing::debug!(
            "Stroke pattern {:?} matched {} of {} characters",
            translated,
            results.len(),
            store.len()
        );

        results
    }

    /// Typed variant of [`find_by_strokes`](Self::find_by_strokes)
    pub fn find_codes(&self, store: &CharacterStore, codes: &[StrokeCode]) -> Vec<SearchResult> {
        let codes: Vec<&str> = codes.iter().map(|code| code.code()).collect();
        self.find_by_strokes(store, &codes)
    }

    /// Find with a cap on the number of results
    pub fn find_limit<S: AsRef<str>>(
        &self,
        store: &CharacterStore,
        pattern: &[S],
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut results = self.find_by_strokes(store, pattern);
        results.truncate(limit);
        results
    }
}

/// True iff `pattern` equals the first `pattern.len()` entries of `strokes`
#[inline]
pub fn is_prefix_match<S: AsRef<str>>(strokes: &[String], pattern: &[S]) -> bool {
    pattern.len() <= strokes.len()
        && strokes
            .iter()
            .zip(pattern)
            .all(|(stroke, expected)| stroke == expected.as_ref())
}

fn to_result(record: &CharacterRecord, strokes: &[String]) -> SearchResult {
    SearchResult {
        character: record.character().to_string(),
        pinyin: record.pinyin().to_string(),
        meaning: record.meaning().to_string(),
        stroke_count: strokes.len(),
        strokes: strokes.to_vec(),
    }
}
