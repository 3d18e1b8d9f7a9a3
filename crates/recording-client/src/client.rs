use readalong_http::HttpClient;

use crate::error::Error;
use crate::types::{RecordingDetails, parse_response};

pub struct RecordingClient<C> {
    http: C,
}

impl<C: HttpClient> RecordingClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn get_recording(
        &self,
        document_id: &str,
        recording_id: &str,
    ) -> Result<RecordingDetails, Error> {
        if document_id.trim().is_empty() || recording_id.trim().is_empty() {
            return Err(Error::MissingIds);
        }

        let path = format!(
            "/recordings/{}/{}",
            urlencoding::encode(document_id),
            urlencoding::encode(recording_id)
        );
        let bytes = self.http.get(&path).await.map_err(Error::Http)?;
        parse_response(&bytes)
    }
}
