use readalong_timing::TimingTable;

/// Where to seek when word `index` is clicked: slightly before its onset,
/// never before zero. `None` when the word has no known start.
pub fn seek_target(table: &TimingTable, index: usize, padding: f64) -> Option<f64> {
    let start = table.get(index)?.start?;
    Some((start - padding).max(0.0))
}
