use std::sync::{Arc, Mutex};

use yt_source::CaptionSource;

#[derive(Clone)]
pub struct MockCaptionSource {
    pub transcript: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockCaptionSource {
    pub fn with_transcript(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            transcript: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            transcript: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CaptionSource for MockCaptionSource {
    const LANGUAGES: &'static [&'static str] = &["en"];

    async fn fetch_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.transcript.clone())
    }
}
