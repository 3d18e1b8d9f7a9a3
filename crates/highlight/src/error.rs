use crate::playback::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Playback failed: {0}")]
    Playback(EngineError),
}
