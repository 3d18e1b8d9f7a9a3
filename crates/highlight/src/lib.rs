mod config;
mod controller;
mod control;
mod error;
mod playback;
mod seek;
mod session;
mod surface;

pub use config::SyncConfig;
pub use control::{PlayControl, PlayLabel};
pub use controller::{HighlightController, HighlightState, Transition};
pub use error::Error;
pub use playback::{EngineError, PlaybackEngine, PlaybackEvent};
pub use seek::seek_target;
pub use session::Session;
pub use surface::{RenderedWords, WordSurface};
