use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Document ID and Recording ID are required.")]
    MissingIds,

    #[error("{0}")]
    Http(Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid recording payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a session could not be started. Terminal: playback stays disabled.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Document ID and Recording ID are required.")]
    MissingIds,

    #[error("Failed to load recording: {0}")]
    Fetch(Error),

    #[error("Playback is blocked due to content mismatch.")]
    ContentMismatch,
}

impl From<Error> for LoadError {
    fn from(error: Error) -> Self {
        match error {
            Error::MissingIds => Self::MissingIds,
            other => Self::Fetch(other),
        }
    }
}
