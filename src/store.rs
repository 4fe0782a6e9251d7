// Stroke Navigator Character Store
// Loads, validates and saves the character dictionary

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::data::DataLoader;
use crate::types::{StoreError, ValidationIssue};

/// Radical reported for records that carry none
pub const UNKNOWN_RADICAL: &str = "unknown";

/// Stroke field of a dictionary entry
///
/// Entries are loosely typed on disk, so a `strokes` value can be absent or of
/// the wrong shape. The raw value is kept in that case so saving is lossless.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Strokes {
    /// No `strokes` key
    #[default]
    Missing,
    /// A list of stroke names in drawing order
    Sequence(Vec<String>),
    /// Present, but not a list of strings
    Invalid(Value),
}

impl Strokes {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) if items.iter().all(Value::is_string) => Strokes::Sequence(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Strokes::Invalid(other),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Strokes::Missing)
    }

    /// The stroke list, if the field holds one
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Strokes::Sequence(strokes) => Some(strokes),
            _ => None,
        }
    }

    /// Number of entries; 0 when missing or not a list
    pub fn len(&self) -> usize {
        match self {
            Strokes::Sequence(strokes) => strokes.len(),
            Strokes::Invalid(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Strokes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Strokes::Missing => serializer.serialize_none(),
            Strokes::Sequence(strokes) => strokes.serialize(serializer),
            Strokes::Invalid(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Strokes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Strokes::from_value)
    }
}

/// Text field of a dictionary entry (`char`, `pinyin`, `meaning`, `radical`)
///
/// Like [`Strokes`], a present value of the wrong type (including `null`) is
/// kept as-is so the record still loads and saves unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TextField {
    /// Key absent
    #[default]
    Missing,
    Text(String),
    /// Present, but not a string
    Invalid(Value),
}

impl TextField {
    pub fn is_missing(&self) -> bool {
        matches!(self, TextField::Missing)
    }

    /// The text, if the field holds a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextField::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Serialize for TextField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TextField::Missing => serializer.serialize_none(),
            TextField::Text(text) => serializer.serialize_str(text),
            TextField::Invalid(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| match value {
            Value::String(text) => TextField::Text(text),
            other => TextField::Invalid(other),
        })
    }
}

/// One dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Key in the source document
    #[serde(skip)]
    pub id: String,

    #[serde(rename = "char", default, skip_serializing_if = "TextField::is_missing")]
    pub character: TextField,

    #[serde(default, skip_serializing_if = "Strokes::is_missing")]
    pub strokes: Strokes,

    #[serde(default, skip_serializing_if = "TextField::is_missing")]
    pub pinyin: TextField,

    #[serde(default, skip_serializing_if = "TextField::is_missing")]
    pub meaning: TextField,

    #[serde(default, skip_serializing_if = "TextField::is_missing")]
    pub radical: TextField,

    /// Unrecognized keys, kept for saving
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CharacterRecord {
    /// Create a complete record
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        character: impl Into<String>,
        strokes: Vec<S>,
        pinyin: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            character: TextField::Text(character.into()),
            strokes: Strokes::Sequence(strokes.into_iter().map(Into::into).collect()),
            pinyin: TextField::Text(pinyin.into()),
            meaning: TextField::Text(meaning.into()),
            radical: TextField::Missing,
            extra: Map::new(),
        }
    }

    /// Set radical
    pub fn with_radical(mut self, radical: impl Into<String>) -> Self {
        self.radical = TextField::Text(radical.into());
        self
    }

    pub fn character(&self) -> &str {
        self.character.as_text().unwrap_or_default()
    }

    pub fn pinyin(&self) -> &str {
        self.pinyin.as_text().unwrap_or_default()
    }

    pub fn meaning(&self) -> &str {
        self.meaning.as_text().unwrap_or_default()
    }

    pub fn radical(&self) -> &str {
        self.radical.as_text().unwrap_or(UNKNOWN_RADICAL)
    }

    /// Stroke names in drawing order, `None` if absent or malformed
    pub fn stroke_sequence(&self) -> Option<&[String]> {
        self.strokes.as_sequence()
    }

    /// Advisory checks for this record, in field order
    fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let missing = |field: &'static str| ValidationIssue::MissingField {
            id: self.id.clone(),
            field,
        };

        if self.character.is_missing() {
            issues.push(missing("char"));
        }
        if self.strokes.is_missing() {
            issues.push(missing("strokes"));
        }
        if self.pinyin.is_missing() {
            issues.push(missing("pinyin"));
        }
        if self.meaning.is_missing() {
            issues.push(missing("meaning"));
        }

        for (field, value) in [
            ("char", &self.character),
            ("pinyin", &self.pinyin),
            ("meaning", &self.meaning),
            ("radical", &self.radical),
        ] {
            if let TextField::Invalid(_) = value {
                issues.push(ValidationIssue::FieldNotText {
                    id: self.id.clone(),
                    field,
                });
            }
        }

        match &self.strokes {
            Strokes::Invalid(Value::Array(items)) => {
                for (position, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        issues.push(ValidationIssue::StrokeNotText {
                            id: self.id.clone(),
                            position,
                        });
                    }
                }
            }
            Strokes::Invalid(_) => issues.push(ValidationIssue::StrokesNotList {
                id: self.id.clone(),
            }),
            Strokes::Missing | Strokes::Sequence(_) => {}
        }

        issues
    }
}

/// In-memory character dictionary, in source-document order
#[derive(Debug, Clone, Default)]
pub struct CharacterStore {
    records: Vec<CharacterRecord>,

    /// id → position in `records`
    index: FxHashMap<String, usize>,
}

impl CharacterStore {
    /// Build a store from records; a repeated id replaces the earlier entry
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            match store.index.get(&record.id) {
                Some(&pos) => store.records[pos] = record,
                None => {
                    store.index.insert(record.id.clone(), store.records.len());
                    store.records.push(record);
                }
            }
        }
        store
    }

    /// Parse a dictionary document: an object mapping ids to entries
    ///
    /// # Example
    /// ```
    /// # use stroke_nav::store::CharacterStore;
    /// let store = CharacterStore::from_json(r#"{"1": {"char": "一", "strokes": ["横"]}}"#).unwrap();
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.all()[0].pinyin(), "");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(entries.len());
        for (id, entry) in entries {
            let mut record: CharacterRecord = serde_json::from_value(entry)?;
            record.id = id;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Load a dictionary file, reporting why it could not be used
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StoreError::MissingDataSource {
                    path: path.to_path_buf(),
                }
            } else {
                StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let store = Self::from_json(&json).map_err(|source| StoreError::MalformedDataSource {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loaded {} characters from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load a dictionary file, falling back to an empty store
    ///
    /// A missing or unreadable file is not fatal: searching an empty store
    /// simply finds nothing.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(store) => store,
            Err(err) => {
                match &err {
                    StoreError::MissingDataSource { .. } => tracing::warn!("{err}"),
                    StoreError::MalformedDataSource { source, .. } => {
                        tracing::warn!("{err}: {source}")
                    }
                    StoreError::Io { source, .. } => tracing::warn!("{err}: {source}"),
                    StoreError::Serialize(_) => tracing::warn!("{err}"),
                }
                Self::default()
            }
        }
    }

    /// The bundled sample dictionary
    pub fn embedded() -> Self {
        match Self::from_json(DataLoader::characters_json()) {
            Ok(store) => {
                tracing::info!("Loaded {} embedded characters", store.len());
                store
            }
            Err(err) => {
                tracing::warn!("Embedded dictionary is invalid: {err}");
                Self::default()
            }
        }
    }

    /// Every record, in document order
    pub fn all(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report incomplete records without rejecting them
    pub fn validate(&self) -> Vec<ValidationIssue> {
        self.records.iter().flat_map(CharacterRecord::issues).collect()
    }

    /// Serialize back to the document shape, two-space indented
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        let mut document = Map::with_capacity(self.records.len());
        for record in &self.records {
            let entry = serde_json::to_value(record).map_err(StoreError::Serialize)?;
            document.insert(record.id.clone(), entry);
        }
        serde_json::to_string_pretty(&Value::Object(document)).map_err(StoreError::Serialize)
    }

    /// Write the dictionary to `path`, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;

        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, json).map_err(io_err)?;

        tracing::info!("Saved {} characters to {}", self.len(), path.display());
        Ok(())
    }
}
