// Stroke Navigator Translator
// Maps one-letter stroke codes to canonical stroke names

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::types::StrokeCode;

/// Process-wide code → name table, in guide order
pub static STROKE_TABLE: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    StrokeCode::ALL
        .iter()
        .map(|code| (code.code(), code.name()))
        .collect()
});

/// Translator from input codes (`h`, `s`, ...) to stroke names (`横`, `竖`, ...)
///
/// Unknown codes are passed through untouched, so they can only ever match a
/// dictionary stroke spelled the same way. Input validation lives in
/// [`crate::pattern::parse_pattern`].
#[derive(Debug, Clone)]
pub struct StrokeCodeTranslator {
    /// Table in display order
    entries: Vec<(&'static str, &'static str)>,

    /// Code → name lookup
    lookup: FxHashMap<&'static str, &'static str>,
}

impl StrokeCodeTranslator {
    /// Build a translator over an explicit table
    ///
    /// # Example
    /// ```
    /// # use stroke_nav::translator::{StrokeCodeTranslator, STROKE_TABLE};
    /// let translator = StrokeCodeTranslator::new(&STROKE_TABLE);
    /// assert_eq!(translator.translate(&["h", "s"]), vec!["横", "竖"]);
    /// ```
    pub fn new(table: &[(&'static str, &'static str)]) -> Self {
        let lookup = table.iter().copied().collect();
        Self {
            entries: table.to_vec(),
            lookup,
        }
    }

    /// Translate each code to its stroke name, passing unknown codes through
    pub fn translate<S: AsRef<str>>(&self, codes: &[S]) -> Vec<String> {
        codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                self.lookup.get(code).copied().unwrap_or(code).to_string()
            })
            .collect()
    }

    /// True iff `code` is one of the recognized keys
    #[inline]
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.lookup.contains_key(code)
    }

    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.lookup.get(code).copied()
    }

    /// Table entries in display order
    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }

    /// Stroke types guide text
    pub fn help(&self) -> String {
        let mut help = String::from("Stroke Types Guide:\n");
        for (code, name) in &self.entries {
            match code.parse::<StrokeCode>() {
                Ok(stroke) => help.push_str(&format!("  {} - {} ({})\n", code, name, stroke.pinyin())),
                Err(_) => help.push_str(&format!("  {} - {}\n", code, name)),
            }
        }
        help
    }
}

impl Default for StrokeCodeTranslator {
    fn default() -> Self {
        Self::new(&STROKE_TABLE)
    }
}
