use std::path::PathBuf;

use readalong_http::{HttpClient, ReqwestClient};
use readalong_recording_client::{Error, LoadError, Prepared, RecordingClient, load};

/// Ids used when a fixture stands in for the server.
const FIXTURE_ID: &str = "local";

/// Where the recording payload comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Remote {
        base_url: String,
        document_id: String,
        recording_id: String,
    },
    Fixture(PathBuf),
}

/// Serves one JSON payload from disk for every request.
pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HttpClient for FixtureFile {
    async fn get(&self, path: &str) -> Result<Vec<u8>, readalong_http::Error> {
        tracing::debug!(request = path, fixture = %self.path.display(), "fixture_get");
        Ok(tokio::fs::read(&self.path).await?)
    }
}

pub async fn fetch(source: &Source, recheck: bool) -> Result<Prepared, LoadError> {
    let prepared = match source {
        Source::Remote {
            base_url,
            document_id,
            recording_id,
        } => {
            let http =
                ReqwestClient::new(base_url).map_err(|e| LoadError::Fetch(Error::Http(e)))?;
            let base = http.base_url().clone();
            let prepared = load(&RecordingClient::new(http), document_id, recording_id).await?;
            match prepared.audio_url(&base) {
                Ok(url) => tracing::info!(%url, "audio_resolved"),
                Err(error) => {
                    tracing::warn!(%error, audio_path = %prepared.audio_path, "audio_url_invalid")
                }
            }
            prepared
        }
        Source::Fixture(path) => {
            let client = RecordingClient::new(FixtureFile::new(path.clone()));
            load(&client, FIXTURE_ID, FIXTURE_ID).await?
        }
    };

    if recheck {
        match prepared.recheck_content() {
            Some(true) => tracing::info!("content_recheck_passed"),
            Some(false) => tracing::warn!("content_recheck_disagrees"),
            None => tracing::debug!("content_recheck_skipped"),
        }
    }

    Ok(prepared)
}
