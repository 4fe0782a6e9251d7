// Stroke Navigator Statistics
// Aggregate counts over a loaded dictionary

use crate::store::CharacterStore;
use crate::types::Stats;

/// Count characters by stroke count and by radical
///
/// Records without a stroke list count as 0 strokes; records without a
/// radical are grouped under `"unknown"`.
pub fn summarize(store: &CharacterStore) -> Stats {
    let mut stats = Stats::default();
    if store.is_empty() {
        return stats;
    }

    stats.total_characters = store.len();
    for record in store.all() {
        *stats
            .stroke_distribution
            .entry(record.strokes.len())
            .or_insert(0) += 1;
        *stats
            .radical_distribution
            .entry(record.radical().to_string())
            .or_insert(0) += 1;
    }

    stats
}
