// Stroke Navigator Search Engine
// Main API that combines the dictionary and the matcher

use crate::config::Config;
use crate::matcher::StrokeMatcher;
use crate::pattern::parse_pattern;
use crate::stats::summarize;
use crate::store::CharacterStore;
use crate::types::{PatternError, SearchResult, Stats, StrokeCode, ValidationIssue};

/// Main stroke search engine
///
/// Combines:
/// - Pattern parsing (raw text → stroke codes)
/// - Prefix matching against the dictionary
/// - Statistics and validation reports
pub struct StrokeNavigator {
    /// Loaded dictionary, read-only during searches
    store: CharacterStore,

    matcher: StrokeMatcher,
}

impl StrokeNavigator {
    /// Create a navigator over an already loaded store
    pub fn new(store: CharacterStore) -> Self {
        Self {
            store,
            matcher: StrokeMatcher::default(),
        }
    }

    /// Load the dictionary named by `config`, empty if it cannot be read
    pub fn from_config(config: &Config) -> Self {
        Self::new(CharacterStore::load(config.characters_path()))
    }

    /// Use the bundled sample dictionary
    pub fn embedded() -> Self {
        Self::new(CharacterStore::embedded())
    }

    /// Execute a search query
    ///
    /// # Arguments
    /// * `query` - Stroke codes typed by the user (e.g., "h s p")
    ///
    /// # Returns
    /// Matching characters in dictionary order
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, PatternError> {
        let codes = parse_pattern(query)?;
        Ok(self.find_codes(&codes))
    }

    /// Search with limit on results
    pub fn search_limit(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, PatternError> {
        let mut results = self.search(query)?;
        results.truncate(limit);
        Ok(results)
    }

    /// Search with already split codes, no validation
    pub fn find_by_strokes<S: AsRef<str>>(&self, pattern: &[S]) -> Vec<SearchResult> {
        self.matcher.find_by_strokes(&self.store, pattern)
    }

    pub fn find_codes(&self, codes: &[StrokeCode]) -> Vec<SearchResult> {
        self.matcher.find_codes(&self.store, codes)
    }

    pub fn stroke_help(&self) -> String {
        self.matcher.translator().help()
    }

    /// Get statistics about the current dictionary
    pub fn stats(&self) -> Stats {
        summarize(&self.store)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        self.store.validate()
    }

    pub fn store(&self) -> &CharacterStore {
        &self.store
    }
}

impl Default for StrokeNavigator {
    fn default() -> Self {
        Self::new(CharacterStore::default())
    }
}
