use std::{fmt::Debug, future::Future, path::PathBuf};

use serde::Deserialize;
use yt_source::DataUri;

pub trait Transcriber {
    const TRANSCRIPTION_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_input: AudioInput,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub enum AudioInput {
    DataUri(DataUri),
    File(PathBuf),
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}
