use readalong_timing::{DEFAULT_PADDING_SECS, TimingIndex, TimingTable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncConfig {
    /// Seconds added around each word interval for matching, and subtracted
    /// from the onset when seeking.
    pub padding: f64,
}

impl SyncConfig {
    pub fn from_padding_ms(padding_ms: u64) -> Self {
        Self {
            padding: padding_ms as f64 / 1000.0,
        }
    }

    pub fn index(&self, table: TimingTable) -> TimingIndex {
        TimingIndex::new(table, self.padding)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING_SECS,
        }
    }
}
