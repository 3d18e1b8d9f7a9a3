use readalong_http::HttpClient;
use readalong_timing::{Alignment, TimingTable, alignment, tokenize};
use url::Url;

use crate::client::RecordingClient;
use crate::error::LoadError;
use crate::similarity::{DEFAULT_SIMILARITY_THRESHOLD, is_similar};
use crate::types::RecordingDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Matches,
    Mismatch,
}

impl ContentStatus {
    pub fn of(details: &RecordingDetails) -> Self {
        if details.content_match {
            Self::Matches
        } else {
            Self::Mismatch
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matches => f.write_str("✅ Content matches"),
            Self::Mismatch => f.write_str("❌ Content doesn't match"),
        }
    }
}

/// A recording that passed the content gate, ready to build a session from.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub words: Vec<String>,
    pub timings: TimingTable,
    pub audio_path: String,
    pub original_text: Option<String>,
    pub alignment: Alignment,
}

impl Prepared {
    /// Audio location: `audio_path` served from the root of `base`.
    pub fn audio_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&format!("/{}", self.audio_path.trim_start_matches('/')))
    }

    /// Recompute the content check locally. Diagnostic only: the fetched flag
    /// has already been enforced by [`open_gate`].
    pub fn recheck_content(&self) -> Option<bool> {
        let original = self.original_text.as_deref()?;
        Some(is_similar(
            original,
            &self.words.join(" "),
            DEFAULT_SIMILARITY_THRESHOLD,
        ))
    }
}

/// Enforce the content gate. Nothing downstream may be built from a recording
/// that fails it.
pub fn open_gate(details: RecordingDetails) -> Result<Prepared, LoadError> {
    if !details.content_match {
        tracing::warn!(
            document_id = ?details.document_id,
            recording_id = ?details.recording_id,
            "content_mismatch"
        );
        return Err(LoadError::ContentMismatch);
    }

    let words = tokenize(&details.transcribed_text);
    let timings = details.word_timings.unwrap_or_default();
    let alignment = alignment(&words, &timings);
    if !alignment.is_matched() {
        tracing::warn!(?alignment, "word_timing_misaligned");
    }

    Ok(Prepared {
        words,
        timings,
        audio_path: details.audio_path,
        original_text: details.original_text,
        alignment,
    })
}

pub async fn load<C: HttpClient>(
    client: &RecordingClient<C>,
    document_id: &str,
    recording_id: &str,
) -> Result<Prepared, LoadError> {
    let details = client.get_recording(document_id, recording_id).await?;
    tracing::info!(
        document_id,
        recording_id,
        status = %ContentStatus::of(&details),
        "recording_fetched"
    );
    open_gate(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::FakeHttp;
    use readalong_timing::WordTiming;

    fn details(content_match: bool) -> RecordingDetails {
        RecordingDetails {
            content_match,
            audio_path: "static/audiorecordings/abc.wav".to_string(),
            transcribed_text: " Hello  world".to_string(),
            original_text: Some("Hello world!".to_string()),
            word_timings: Some(TimingTable::new(vec![
                WordTiming::new(0.0, 0.4).with_text(" Hello"),
                WordTiming::new(0.5, 0.9).with_text(" world"),
            ])),
            ..Default::default()
        }
    }

    #[test]
    fn mismatch_never_opens() {
        let err = open_gate(details(false)).unwrap_err();
        assert!(matches!(err, LoadError::ContentMismatch));
        insta::assert_snapshot!(err.to_string(), @"Playback is blocked due to content mismatch.");
        insta::assert_snapshot!(ContentStatus::of(&details(false)).to_string(), @"❌ Content doesn't match");
    }

    #[test]
    fn match_tokenizes_transcript() {
        let prepared = open_gate(details(true)).unwrap();
        assert_eq!(prepared.words, ["Hello", "world"]);
        assert_eq!(prepared.timings.len(), 2);
        assert!(prepared.alignment.is_matched());
        assert_eq!(prepared.recheck_content(), Some(true));
        insta::assert_snapshot!(ContentStatus::of(&details(true)).to_string(), @"✅ Content matches");
    }

    #[test]
    fn missing_timings_degrade_to_empty_table() {
        let prepared = open_gate(RecordingDetails {
            word_timings: None,
            ..details(true)
        })
        .unwrap();
        assert!(prepared.timings.is_empty());
        assert_eq!(
            prepared.alignment,
            Alignment::MissingTimings {
                words: 2,
                timings: 0
            }
        );
    }

    #[test]
    fn audio_url_is_rooted_at_host() {
        let prepared = open_gate(details(true)).unwrap();
        let base = Url::parse("https://reader.example.com/app/").unwrap();
        assert_eq!(
            prepared.audio_url(&base).unwrap().as_str(),
            "https://reader.example.com/static/audiorecordings/abc.wav"
        );
    }

    #[tokio::test]
    async fn load_reports_fetch_failures() {
        let client = RecordingClient::new(FakeHttp::failing("Server error: 500"));
        let err = load(&client, "doc", "rec").await.unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Failed to load recording: Server error: 500");
    }

    #[tokio::test]
    async fn load_reports_missing_ids() {
        let client = RecordingClient::new(FakeHttp::ok("{}"));
        let err = load(&client, "", "").await.unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Document ID and Recording ID are required.");
    }

    #[tokio::test]
    async fn load_gates_on_content_match() {
        let client = RecordingClient::new(FakeHttp::ok(r#"{"content_match": false}"#));
        assert!(matches!(
            load(&client, "doc", "rec").await,
            Err(LoadError::ContentMismatch)
        ));

        let client = RecordingClient::new(FakeHttp::ok(
            r#"{"content_match": true, "transcribed_text": "a b", "word_timings": [{"start": 0, "end": 1}, {}]}"#,
        ));
        let prepared = load(&client, "doc", "rec").await.unwrap();
        assert_eq!(prepared.words, ["a", "b"]);
        assert_eq!(prepared.timings.timed_count(), 1);
    }
}
