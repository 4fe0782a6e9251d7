// Stroke Navigator Type Definitions
// Core types for stroke codes, search results and errors

use std::path::PathBuf;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// The five basic stroke types a user can type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeCode {
    /// `h` → 横 (héng), horizontal
    Heng,
    /// `s` → 竖 (shù), vertical
    Shu,
    /// `p` → 撇 (piě), left-falling
    Pie,
    /// `n` → 捺 (nà), right-falling
    Na,
    /// `z` → 折 (zhé), turning
    Zhe,
}

impl StrokeCode {
    /// All codes in guide order
    pub const ALL: [StrokeCode; 5] = [
        StrokeCode::Heng,
        StrokeCode::Shu,
        StrokeCode::Pie,
        StrokeCode::Na,
        StrokeCode::Zhe,
    ];

    /// One-letter input code
    pub fn code(self) -> &'static str {
        match self {
            StrokeCode::Heng => "h",
            StrokeCode::Shu => "s",
            StrokeCode::Pie => "p",
            StrokeCode::Na => "n",
            StrokeCode::Zhe => "z",
        }
    }

    /// Canonical stroke name as stored in the dictionary
    pub fn name(self) -> &'static str {
        match self {
            StrokeCode::Heng => "横",
            StrokeCode::Shu => "竖",
            StrokeCode::Pie => "撇",
            StrokeCode::Na => "捺",
            StrokeCode::Zhe => "折",
        }
    }

    pub fn pinyin(self) -> &'static str {
        match self {
            StrokeCode::Heng => "héng",
            StrokeCode::Shu => "shù",
            StrokeCode::Pie => "piě",
            StrokeCode::Na => "nà",
            StrokeCode::Zhe => "zhé",
        }
    }
}

impl std::fmt::Display for StrokeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for StrokeCode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrokeCode::ALL
            .into_iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| PatternError::InvalidCodes {
                codes: vec![s.to_string()],
            })
    }
}

/// A character that matched a stroke query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The character itself (e.g., "十")
    pub character: String,

    pub pinyin: String,

    pub meaning: String,

    /// Total number of strokes, not just the matched prefix
    pub stroke_count: usize,

    /// Full stroke sequence in drawing order
    pub strokes: Vec<String>,
}

/// Aggregate counts over a loaded dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_characters: usize,

    /// stroke count → number of characters
    pub stroke_distribution: FxHashMap<usize, usize>,

    /// radical → number of characters
    pub radical_distribution: FxHashMap<String, usize>,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.total_characters == 0
    }

    /// Stroke distribution ordered by stroke count
    pub fn strokes_sorted(&self) -> Vec<(usize, usize)> {
        let mut rows: Vec<(usize, usize)> = self
            .stroke_distribution
            .iter()
            .map(|(count, n)| (*count, *n))
            .collect();
        rows.sort_unstable();
        rows
    }

    /// Radical distribution, most common first, ties by radical
    pub fn radicals_sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .radical_distribution
            .iter()
            .map(|(radical, n)| (radical.as_str(), *n))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

/// Advisory problems found in a dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Character {id} missing field: {field}")]
    MissingField { id: String, field: &'static str },

    #[error("Character {id} field {field} should be text")]
    FieldNotText { id: String, field: &'static str },

    #[error("Character {id} strokes should be a list")]
    StrokesNotList { id: String },

    #[error("Character {id} stroke at position {position} is not text")]
    StrokeNotText { id: String, position: usize },
}

impl ValidationIssue {
    /// Id of the offending record
    pub fn id(&self) -> &str {
        match self {
            ValidationIssue::MissingField { id, .. }
            | ValidationIssue::FieldNotText { id, .. }
            | ValidationIssue::StrokesNotList { id }
            | ValidationIssue::StrokeNotText { id, .. } => id,
        }
    }
}

/// Stroke pattern parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("No strokes entered")]
    EmptyPattern,

    #[error("Invalid stroke codes: {codes:?} (use only h, s, p, n, z)")]
    InvalidCodes { codes: Vec<String> },
}

/// Dictionary loading and saving errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data file not found: {}", path.display())]
    MissingDataSource { path: PathBuf },

    #[error("Invalid JSON in file: {}", path.display())]
    MalformedDataSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize dictionary: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_code_mapping() {
        let names: Vec<&str> = StrokeCode::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["横", "竖", "撇", "捺", "折"]);
        assert_eq!(StrokeCode::Zhe.pinyin(), "zhé");
    }

    #[test]
    fn test_stroke_code_from_str() {
        assert_eq!("h".parse::<StrokeCode>().unwrap(), StrokeCode::Heng);
        assert_eq!("z".parse::<StrokeCode>().unwrap(), StrokeCode::Zhe);
        assert!(matches!(
            "x".parse::<StrokeCode>(),
            Err(PatternError::InvalidCodes { .. })
        ));
        // Codes are case sensitive; the parser lowercases first
        assert!("H".parse::<StrokeCode>().is_err());
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue::MissingField {
            id: "7".to_string(),
            field: "meaning",
        };
        assert_eq!(issue.to_string(), "Character 7 missing field: meaning");
        assert_eq!(issue.id(), "7");

        let issue = ValidationIssue::FieldNotText {
            id: "9".to_string(),
            field: "pinyin",
        };
        assert_eq!(issue.to_string(), "Character 9 field pinyin should be text");

        let issue = ValidationIssue::StrokesNotList { id: "8".to_string() };
        assert_eq!(issue.to_string(), "Character 8 strokes should be a list");
    }

    #[test]
    fn test_stats_sorted_views() {
        let mut stats = Stats::default();
        assert!(stats.is_empty());

        stats.total_characters = 4;
        stats.stroke_distribution.insert(3, 1);
        stats.stroke_distribution.insert(1, 3);
        stats.radical_distribution.insert("木".to_string(), 1);
        stats.radical_distribution.insert("unknown".to_string(), 3);

        assert_eq!(stats.strokes_sorted(), vec![(1, 3), (3, 1)]);
        assert_eq!(stats.radicals_sorted(), vec![("unknown", 3), ("木", 1)]);
    }
}
