// Stroke Navigator Configuration
// Runtime settings from the environment, overridable from the command line

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CHARACTERS_FILE: &str = "characters.json";
pub const DEFAULT_LOG_FILTER: &str = "stroke_nav=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding dictionary files
    pub data_dir: PathBuf,
    /// Dictionary file name inside `data_dir`
    pub characters_file: String,
    /// Fallback `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Read `STROKE_NAV_DATA_DIR` and `STROKE_NAV_FILE`, with defaults
    pub fn new() -> Self {
        let data_dir = env::var("STROKE_NAV_DATA_DIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let characters_file = env::var("STROKE_NAV_FILE")
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CHARACTERS_FILE.to_string());

        Config {
            data_dir,
            characters_file,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_characters_file(mut self, name: impl Into<String>) -> Self {
        self.characters_file = name.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Full path of the dictionary file
    pub fn characters_path(&self) -> PathBuf {
        self.data_dir.join(&self.characters_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            characters_file: DEFAULT_CHARACTERS_FILE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
