use crate::types::TimingTable;

/// Split a transcript into word units on runs of whitespace.
///
/// Leading and trailing whitespace produce no empty units, so recognizer output
/// such as `" Hello world"` yields two words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// How the tokenized transcript lines up with the timing table.
///
/// Lookups and clicks address words positionally, so a mismatch only means that
/// some words never highlight (or some timings have no word to show them on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Matched,
    MissingTimings { words: usize, timings: usize },
    ExtraTimings { words: usize, timings: usize },
}

impl Alignment {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

pub fn alignment(words: &[String], table: &TimingTable) -> Alignment {
    let (words, timings) = (words.len(), table.len());
    match words.cmp(&timings) {
        std::cmp::Ordering::Equal => Alignment::Matched,
        std::cmp::Ordering::Greater => Alignment::MissingTimings { words, timings },
        std::cmp::Ordering::Less => Alignment::ExtraTimings { words, timings },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordTiming;

    #[test]
    fn tokenize_collapses_whitespace_runs() {
        assert_eq!(
            tokenize(" Hello  world,\n\tagain "),
            ["Hello", "world,", "again"]
        );
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn alignment_reports_both_directions() {
        let words = tokenize("one two three");
        let two = TimingTable::new(vec![WordTiming::new(0.0, 0.1); 2]);
        let three = TimingTable::new(vec![WordTiming::new(0.0, 0.1); 3]);
        let four = TimingTable::new(vec![WordTiming::new(0.0, 0.1); 4]);

        assert!(alignment(&words, &three).is_matched());
        assert_eq!(
            alignment(&words, &two),
            Alignment::MissingTimings {
                words: 3,
                timings: 2
            }
        );
        assert_eq!(
            alignment(&words, &four),
            Alignment::ExtraTimings {
                words: 3,
                timings: 4
            }
        );
    }
}
