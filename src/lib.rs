//! # Stroke Navigator: Chinese Character Lookup by Strokes
//!
//! Find Chinese characters by typing the first few strokes of their
//! drawing order.
//!
//! ## Stroke Codes
//!
//! | Code | Stroke | Pinyin |
//! |------|--------|--------|
//! | `h`  | 横     | héng   |
//! | `s`  | 竖     | shù    |
//! | `p`  | 撇     | piě    |
//! | `n`  | 捺     | nà     |
//! | `z`  | 折     | zhé    |
//!
//! A query such as `h s` finds every character whose stroke sequence starts
//! with 横 竖 (十, 木, 土, ...). Matching is a literal prefix test; stroke
//! order matters.
//!
//! ## Example Usage
//!
//! ```
//! use stroke_nav::StrokeNavigator;
//!
//! let navigator = StrokeNavigator::embedded();
//!
//! let results = navigator.search("h s")?;
//! assert!(results.iter().any(|r| r.character == "十"));
//!
//! let stats = navigator.stats();
//! assert_eq!(stats.total_characters, navigator.store().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Character Store** - Loads the JSON dictionary, falls back to empty
//! - **Translator** - Maps stroke codes to stroke names
//! - **Stroke Matcher** - Prefix filter over the store
//! - **Pattern Parser** - Validates raw user input
//! - **StrokeNavigator API** - Main entry point combining all components

pub mod config;
pub mod data;
pub mod matcher;
pub mod pattern;
pub mod search;
pub mod stats;
pub mod store;
pub mod translator;
pub mod types;

// Re-export main types and functions for convenience
pub use config::Config;
pub use data::DataLoader;
pub use matcher::{is_prefix_match, StrokeMatcher};
pub use pattern::{format_pattern, parse_pattern};
pub use search::StrokeNavigator;
pub use stats::summarize;
pub use store::{CharacterRecord, CharacterStore, Strokes, TextField};
pub use translator::{StrokeCodeTranslator, STROKE_TABLE};
pub use types::{PatternError, SearchResult, Stats, StoreError, StrokeCode, ValidationIssue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
