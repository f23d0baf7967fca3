use std::path::Path;

use serde::{Deserialize, Serialize};
use yt_source::{extract_video_id, AudioDownloader, CaptionSource, DataUri};

use crate::{error::Error, AudioInput, Transcriber};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionOutput {
    pub transcription: String,
}

/// Resolves a transcription for a YouTube URL through the fallback
/// chain: pre-existing captions, then audio download plus
/// speech-to-text, then a descriptive placeholder. Only an unrecognized
/// URL is an error.
#[tracing::instrument(skip(captions, downloader, transcriber))]
pub async fn transcribe_youtube<C, A, T>(
    captions: &C,
    downloader: &A,
    transcriber: &T,
    youtube_url: &str,
) -> Result<TranscriptionOutput, Error>
where
    C: CaptionSource,
    A: AudioDownloader,
    T: Transcriber,
{
    let video_id =
        extract_video_id(youtube_url).ok_or_else(|| Error::InvalidUrl(youtube_url.to_string()))?;

    match captions.fetch_transcript(&video_id).await {
        Ok(Some(text)) if !text.trim().is_empty() => {
            return Ok(TranscriptionOutput {
                transcription: text,
            });
        }
        Ok(_) => {
            tracing::warn!(%video_id, "No pre-existing transcript found, attempting speech-to-text");
        }
        Err(e) => {
            tracing::warn!(%video_id, error = ?e, "Caption lookup failed, attempting speech-to-text");
        }
    }

    let audio = match downloader.download_audio(&video_id).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(%video_id, error = ?e, "Audio download errored");
            None
        }
    };

    let Some(audio) = audio else {
        return Ok(TranscriptionOutput {
            transcription: format!(
                "Audio for video {video_id} could not be downloaded for speech-to-text transcription."
            ),
        });
    };

    match transcriber.transcribe(AudioInput::DataUri(audio)).await {
        Ok(response) if !response.text.trim().is_empty() => Ok(TranscriptionOutput {
            transcription: response.text,
        }),
        Ok(_) => Ok(TranscriptionOutput {
            transcription: format!(
                "Speech-to-text for video {video_id} resulted in an empty transcript."
            ),
        }),
        Err(e) => {
            tracing::error!(%video_id, error = ?e, "Speech-to-text transcription failed");
            Ok(TranscriptionOutput {
                transcription: format!(
                    "Speech-to-text transcription failed for video {video_id}."
                ),
            })
        }
    }
}

/// Transcribes an uploaded audio payload. There is no text to degrade
/// to here, so a malformed data URI or a failed model call is an error.
#[tracing::instrument(skip_all)]
pub async fn transcribe_upload<T: Transcriber>(
    transcriber: &T,
    audio_data_uri: &str,
) -> Result<TranscriptionOutput, Error> {
    let data_uri = DataUri::parse(audio_data_uri)?;

    let response = transcriber
        .transcribe(AudioInput::DataUri(data_uri))
        .await
        .map_err(|e| Error::Transcription(format!("{e:?}")))?;

    if response.text.trim().is_empty() {
        return Err(Error::Transcription(
            "speech-to-text produced an empty transcript".into(),
        ));
    }

    Ok(TranscriptionOutput {
        transcription: response.text,
    })
}

/// Transcribes an audio file on the local filesystem, handing the path
/// to the transcriber directly rather than buffering the file into a
/// data URI first. Failure semantics match [`transcribe_upload`].
#[tracing::instrument(skip(transcriber))]
pub async fn transcribe_file<T: Transcriber>(
    transcriber: &T,
    path: &Path,
) -> Result<TranscriptionOutput, Error> {
    let response = transcriber
        .transcribe(AudioInput::File(path.to_path_buf()))
        .await
        .map_err(|e| Error::Transcription(format!("{e:?}")))?;

    if response.text.trim().is_empty() {
        return Err(Error::Transcription(
            "speech-to-text produced an empty transcript".into(),
        ));
    }

    Ok(TranscriptionOutput {
        transcription: response.text,
    })
}
