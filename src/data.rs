// Stroke Navigator Data
// Embedded sample dictionary and data directory helpers

use std::path::Path;

/// Embedded sample dictionary (same shape as `characters.json` on disk)
pub const CHARACTERS_JSON: &str = include_str!("../data/characters.json");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Get the embedded dictionary document
    pub fn characters_json() -> &'static str {
        CHARACTERS_JSON
    }

    /// Create `dir` if it does not exist yet
    ///
    /// # Returns
    /// `true` if the directory was created by this call
    pub fn ensure_dir(dir: &Path) -> std::io::Result<bool> {
        if dir.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(dir)?;
        tracing::info!("Created data directory: {}", dir.display());
        Ok(true)
    }
}
