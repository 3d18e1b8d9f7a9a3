pub mod index;
pub mod types;
pub mod words;

pub use index::{DEFAULT_PADDING_SECS, TimingIndex};
pub use types::{TimingTable, WordTiming};
pub use words::{Alignment, alignment, tokenize};
