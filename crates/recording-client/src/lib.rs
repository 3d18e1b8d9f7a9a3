mod client;
mod error;
mod gate;
mod similarity;
mod types;

pub use client::RecordingClient;
pub use error::{Error, LoadError};
pub use gate::{ContentStatus, Prepared, load, open_gate};
pub use similarity::{DEFAULT_SIMILARITY_THRESHOLD, is_similar, similarity};
pub use types::*;
