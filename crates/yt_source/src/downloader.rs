use std::{
    future::Future,
    path::{Path, PathBuf},
};

use ytdlp_bindings::YtDlp;

use crate::{is_valid_video_id, DataUri};

/// Audio retrieval for videos without caption transcripts, keyed by
/// video ID. Returns the audio as a data URI ready for a speech-to-text
/// model, or `None` when the download is not possible.
pub trait AudioDownloader {
    const BASE_URL: &'static str;

    fn download_audio(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<DataUri>>> + Send;
}

/// Downloader backed by `yt-dlp`. Downloaded mp3 files are kept in
/// `workdir` and reused on subsequent calls for the same video.
pub struct YtDlpDownloader {
    yt_dlp: YtDlp,
    workdir: PathBuf,
}

impl YtDlpDownloader {
    pub fn new(workdir: impl Into<PathBuf>, _cookies_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let yt_dlp = YtDlp::new()?;
        Ok(YtDlpDownloader {
            yt_dlp,
            workdir: workdir.into(),
        })
    }

    fn fetch_mp3(&self, video_id: &str, audio_mp3_path: &Path) -> anyhow::Result<()> {
        let video_url = format!("{}?v={video_id}", Self::BASE_URL);
        let audio_output_template = self.workdir.join(format!("{video_id}.%(ext)s"));

        if let Err(e) = self
            .yt_dlp
            .download_audio(&video_url, &audio_output_template)
        {
            anyhow::bail!("Failed to download audio: {e:?}");
        }

        if !audio_mp3_path.exists() {
            anyhow::bail!(
                "yt-dlp did not produce expected file: {}",
                audio_mp3_path.display()
            );
        }

        Ok(())
    }
}

impl AudioDownloader for YtDlpDownloader {
    const BASE_URL: &'static str = "https://youtube.com/watch";

    async fn download_audio(&self, video_id: &str) -> anyhow::Result<Option<DataUri>> {
        if !is_valid_video_id(video_id) {
            tracing::error!(%video_id, "Invalid video_id for audio download");
            return Ok(None);
        }

        std::fs::create_dir_all(&self.workdir)?;
        let audio_mp3_path = self.workdir.join(format!("{video_id}.mp3"));

        if !audio_mp3_path.exists() {
            if let Err(e) = self.fetch_mp3(video_id, &audio_mp3_path) {
                tracing::warn!(%video_id, error = ?e, "Audio download failed");
                return Ok(None);
            }
        } else {
            tracing::debug!("Audio already exists at {}", audio_mp3_path.display());
        }

        match std::fs::read(&audio_mp3_path) {
            Ok(bytes) if !bytes.is_empty() => Ok(Some(DataUri::new("audio/mpeg", bytes))),
            Ok(_) => {
                tracing::warn!(%video_id, "Downloaded audio file is empty");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(%video_id, error = %e, "Failed to read downloaded audio");
                Ok(None)
            }
        }
    }
}
