use std::collections::HashSet;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Share of the original's distinct words that also occur in `comparison`.
///
/// Case and punctuation are ignored. An empty original is fully covered.
pub fn similarity(original: &str, comparison: &str) -> f64 {
    let original = word_set(original);
    if original.is_empty() {
        return 1.0;
    }

    let comparison = word_set(comparison);
    let common = original.intersection(&comparison).count();
    common as f64 / original.len() as f64
}

pub fn is_similar(original: &str, comparison: &str, threshold: f64) -> bool {
    similarity(original, comparison) >= threshold
}
