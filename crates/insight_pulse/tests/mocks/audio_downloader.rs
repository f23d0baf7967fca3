use std::sync::{Arc, Mutex};

use yt_source::{AudioDownloader, DataUri};

#[derive(Clone)]
pub struct MockAudioDownloader {
    pub audio: Option<DataUri>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockAudioDownloader {
    pub fn with_audio() -> Self {
        Self {
            audio: Some(DataUri::new("audio/mpeg", b"mock audio bytes".to_vec())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            audio: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl AudioDownloader for MockAudioDownloader {
    const BASE_URL: &'static str = "https://youtube.com/watch";

    async fn download_audio(&self, video_id: &str) -> anyhow::Result<Option<DataUri>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.audio.clone())
    }
}
