/// Speech interval of a single word, in seconds from the start of the recording.
///
/// Either bound may be missing when the recognizer produced no timing for the
/// word. Such entries never match a lookup and cannot be seeked to.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordTiming {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    /// Word as recognized. Carried for display only; matching is positional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl WordTiming {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            text: None,
        }
    }

    pub fn untimed() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Both bounds, if both are known. `end < start` is passed through as-is.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.start?, self.end?))
    }
}

/// Per-word timings in document order. Position `i` belongs to the `i`-th
/// whitespace-separated token of the transcript.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TimingTable(Vec<WordTiming>);

impl TimingTable {
    pub fn new(entries: Vec<WordTiming>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordTiming> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordTiming> {
        self.0.iter()
    }

    /// Number of entries with both bounds present.
    pub fn timed_count(&self) -> usize {
        self.0.iter().filter(|w| w.bounds().is_some()).count()
    }

    /// Latest known `start` or `end`, a lower bound for the recording length.
    pub fn latest_time(&self) -> Option<f64> {
        self.0
            .iter()
            .flat_map(|w| [w.start, w.end])
            .flatten()
            .reduce(f64::max)
    }
}

impl From<Vec<WordTiming>> for TimingTable {
    fn from(entries: Vec<WordTiming>) -> Self {
        Self(entries)
    }
}

impl FromIterator<WordTiming> for TimingTable {
    fn from_iter<I: IntoIterator<Item = WordTiming>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TimingTable {
    type Item = &'a WordTiming;
    type IntoIter = std::slice::Iter<'a, WordTiming>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
