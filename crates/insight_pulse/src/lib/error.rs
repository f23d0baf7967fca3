#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid YouTube URL: {0}")]
    InvalidUrl(String),
    #[error("invalid audio data URI: {0}")]
    InvalidDataUri(#[from] yt_source::DataUriError),
    #[error("transcription failed: {0}")]
    Transcription(String),
}
