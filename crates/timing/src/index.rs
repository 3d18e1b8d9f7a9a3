use crate::types::TimingTable;

/// Tolerance applied on both sides of every word interval (50 ms).
pub const DEFAULT_PADDING_SECS: f64 = 0.05;

/// Answers "which word is being spoken at time `t`" for one recording.
///
/// A word matches when `start - padding <= t <= end + padding`, both ends
/// inclusive. Words without both bounds never match. Padding makes adjacent
/// windows overlap; the earliest index wins.
#[derive(Debug, Clone)]
pub struct TimingIndex {
    table: TimingTable,
    padding: f64,
}

impl TimingIndex {
    pub fn new(table: TimingTable, padding: f64) -> Self {
        Self { table, padding }
    }

    pub fn with_default_padding(table: TimingTable) -> Self {
        Self::new(table, DEFAULT_PADDING_SECS)
    }

    pub fn table(&self) -> &TimingTable {
        &self.table
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Index of the first word whose padded window contains `t`.
    pub fn lookup(&self, t: f64) -> Option<usize> {
        self.table
            .iter()
            .enumerate()
            .find_map(|(index, word)| {
                let (lo, hi) = self.pad(word.bounds()?);
                (lo <= t && t <= hi).then_some(index)
            })
    }

    /// Padded `(lo, hi)` window of a word, if it has both bounds.
    pub fn padded_window(&self, index: usize) -> Option<(f64, f64)> {
        self.table
            .get(index)
            .and_then(|word| word.bounds())
            .map(|bounds| self.pad(bounds))
    }

    fn pad(&self, (start, end): (f64, f64)) -> (f64, f64) {
        (start - self.padding, end + self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordTiming;

    fn index(entries: Vec<WordTiming>) -> TimingIndex {
        TimingIndex::with_default_padding(TimingTable::new(entries))
    }

    #[test]
    fn empty_table_never_matches() {
        let idx = index(vec![]);
        for t in [-1.0, 0.0, 0.5, 100.0] {
            assert_eq!(idx.lookup(t), None);
        }
    }

    #[test]
    fn untimed_entries_never_match() {
        let idx = index(vec![
            WordTiming::untimed(),
            WordTiming {
                start: Some(0.0),
                end: None,
                text: None,
            },
            WordTiming {
                start: None,
                end: Some(1.0),
                text: None,
            },
        ]);
        for t in [0.0, 0.5, 1.0] {
            assert_eq!(idx.lookup(t), None);
        }
    }

    #[test]
    fn padding_extends_leading_edge() {
        let idx = index(vec![WordTiming::new(1.0, 2.0)]);
        assert_eq!(idx.lookup(0.951), Some(0));
        assert_eq!(idx.lookup(0.949), None);
    }

    #[test]
    fn padding_extends_trailing_edge() {
        let idx = index(vec![WordTiming::new(1.0, 2.0)]);
        assert_eq!(idx.lookup(2.049), Some(0));
        assert_eq!(idx.lookup(2.051), None);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let idx = TimingIndex::new(TimingTable::new(vec![WordTiming::new(1.0, 2.0)]), 0.0);
        assert_eq!(idx.lookup(1.0), Some(0));
        assert_eq!(idx.lookup(2.0), Some(0));
    }

    #[test]
    fn overlap_resolves_to_earliest_index() {
        let idx = index(vec![WordTiming::new(0.0, 1.0), WordTiming::new(0.95, 2.0)]);
        assert_eq!(idx.lookup(1.0), Some(0));
        assert_eq!(idx.lookup(1.2), Some(1));
    }

    #[test]
    fn skips_untimed_words_between_timed_ones() {
        let idx = index(vec![
            WordTiming::new(0.0, 0.4),
            WordTiming::untimed(),
            WordTiming::new(1.0, 1.4),
        ]);
        assert_eq!(idx.lookup(0.2), Some(0));
        assert_eq!(idx.lookup(0.7), None);
        assert_eq!(idx.lookup(1.2), Some(2));
    }

    #[test]
    fn inverted_interval_does_not_panic() {
        // 2.0..1.0 padded is 1.95..1.05: an empty window.
        let idx = index(vec![WordTiming::new(2.0, 1.0)]);
        for t in [0.0, 1.0, 1.5, 2.0, 3.0] {
            assert_eq!(idx.lookup(t), None);
        }

        // 1.05..1.0 padded is 1.0..1.05: still a window.
        let narrow = index(vec![WordTiming::new(1.05, 1.0)]);
        assert_eq!(narrow.lookup(1.02), Some(0));
    }

    #[test]
    fn padded_window_reports_bounds() {
        let idx = TimingIndex::new(
            TimingTable::new(vec![WordTiming::new(1.0, 2.0), WordTiming::untimed()]),
            0.5,
        );
        assert_eq!(idx.padded_window(0), Some((0.5, 2.5)));
        assert_eq!(idx.padded_window(1), None);
        assert_eq!(idx.padded_window(7), None);
    }

    fn table_from(entries: &[(Option<u16>, Option<u16>)]) -> TimingTable {
        entries
            .iter()
            .map(|&(start, end)| WordTiming {
                start: start.map(|s| f64::from(s) / 100.0),
                end: end.map(|e| f64::from(e) / 100.0),
                text: None,
            })
            .collect()
    }

    #[quickcheck_macros::quickcheck]
    fn prop_lookup_is_first_containing_window(
        entries: Vec<(Option<u16>, Option<u16>)>,
        t: u16,
    ) -> bool {
        let idx = TimingIndex::with_default_padding(table_from(&entries));
        let t = f64::from(t) / 100.0;
        let contains = |i: usize| {
            idx.padded_window(i)
                .is_some_and(|(lo, hi)| lo <= t && t <= hi)
        };

        match idx.lookup(t) {
            Some(found) => contains(found) && (0..found).all(|i| !contains(i)),
            None => (0..idx.len()).all(|i| !contains(i)),
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_unpadded_match_lies_within_raw_bounds(
        entries: Vec<(Option<u16>, Option<u16>)>,
        t: u16,
    ) -> bool {
        let table = table_from(&entries);
        let idx = TimingIndex::new(table.clone(), 0.0);
        let t = f64::from(t) / 100.0;

        match idx.lookup(t) {
            Some(found) => table
                .get(found)
                .and_then(WordTiming::bounds)
                .is_some_and(|(start, end)| start <= t && t <= end),
            None => true,
        }
    }
}
