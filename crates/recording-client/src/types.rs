use readalong_timing::TimingTable;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Payload of `GET /recordings/{document_id}/{recording_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingDetails {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub recording_id: Option<String>,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub uploader_id: Option<String>,
    /// Absent is treated as a mismatch.
    #[serde(default)]
    pub content_match: bool,
    #[serde(default)]
    pub audio_path: String,
    #[serde(default)]
    pub transcribed_text: String,
    #[serde(default)]
    pub word_timings: Option<TimingTable>,
}

pub(crate) fn parse_response(bytes: &[u8]) -> Result<RecordingDetails, Error> {
    Ok(serde_json::from_slice(bytes)?)
}
