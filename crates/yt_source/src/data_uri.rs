use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

/// An audio payload carried inline as a `data:<mime>;base64,<payload>`
/// URI. This is the interchange format between the upload surface, the
/// audio downloader and the speech-to-text transcriber.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUri {
    mime_type: String,
    data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    #[error("data URI is missing the 'data:' scheme")]
    MissingScheme,
    #[error("data URI is missing the ';base64,' marker")]
    MissingBase64Marker,
    #[error("data URI has an empty payload")]
    EmptyPayload,
    #[error("failed to decode base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        DataUri {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` string, decoding the payload.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or(DataUriError::MissingBase64Marker)?;

        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }

        let data = STANDARD.decode(payload)?;

        Ok(DataUri {
            mime_type: mime_type.to_string(),
            data,
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// File extension matching the mime type, for multipart file names.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/mp4" | "audio/aac" | "audio/x-m4a" => "m4a",
            "audio/wav" | "audio/x-wav" => "wav",
            "audio/flac" => "flac",
            "audio/ogg" => "ogg",
            "audio/webm" => "webm",
            _ => "mp3",
        }
    }
}

/// Mime type for a file extension, for wrapping local audio files as
/// data URIs. Unknown extensions default to `audio/mpeg`.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" | "aac" => "audio/mp4",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "oga" => "audio/ogg",
        "webm" => "audio/webm",
        _ => "audio/mpeg",
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.data)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let uri = DataUri::new("audio/mpeg", b"some audio bytes".to_vec());
        let parsed = DataUri::parse(&uri.to_string()).expect("should parse");
        assert_eq!(parsed, uri);
        assert_eq!(parsed.mime_type(), "audio/mpeg");
        assert_eq!(parsed.bytes(), b"some audio bytes");
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        let result = DataUri::parse("audio/mpeg;base64,AAAA");
        assert!(matches!(result, Err(DataUriError::MissingScheme)));
    }

    #[test]
    fn test_parse_rejects_missing_marker() {
        let result = DataUri::parse("data:audio/mpeg,AAAA");
        assert!(matches!(result, Err(DataUriError::MissingBase64Marker)));
    }

    #[test]
    fn test_parse_rejects_empty_payload() {
        let result = DataUri::parse("data:audio/mpeg;base64,");
        assert!(matches!(result, Err(DataUriError::EmptyPayload)));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let result = DataUri::parse("data:audio/mpeg;base64,!!!not-base64!!!");
        assert!(matches!(result, Err(DataUriError::Decode(_))));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(DataUri::new("audio/mpeg", vec![]).extension(), "mp3");
        assert_eq!(DataUri::new("audio/wav", vec![]).extension(), "wav");
        assert_eq!(DataUri::new("audio/mp4", vec![]).extension(), "m4a");
        assert_eq!(DataUri::new("application/x-unknown", vec![]).extension(), "mp3");
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("mp3"), "audio/mpeg");
        assert_eq!(mime_for_extension("M4A"), "audio/mp4");
        assert_eq!(mime_for_extension("wav"), "audio/wav");
        assert_eq!(mime_for_extension("xyz"), "audio/mpeg");
    }
}
