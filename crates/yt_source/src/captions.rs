use std::future::Future;

use itertools::Itertools;
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Lookup of pre-existing caption transcripts, keyed by video ID.
///
/// Implementations return `Ok(None)` when no transcript is available,
/// including when the underlying library errors out; a missing
/// transcript is an expected state, not a failure.
pub trait CaptionSource {
    const LANGUAGES: &'static [&'static str];

    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}

/// Caption client backed by `yt_transcript_rs`.
pub struct CaptionClient(YouTubeTranscriptApi);

impl CaptionClient {
    pub fn new() -> anyhow::Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)?;
        Ok(CaptionClient(api))
    }
}

impl CaptionSource for CaptionClient {
    const LANGUAGES: &'static [&'static str] = &["en"];

    async fn fetch_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        if video_id.is_empty() {
            tracing::error!("No video_id provided to fetch_transcript");
            return Ok(None);
        }

        match self
            .0
            .fetch_transcript(video_id, Self::LANGUAGES, false)
            .await
        {
            Ok(transcript) => {
                let text = join_caption_texts(
                    transcript.snippets.iter().map(|snippet| snippet.text.as_str()),
                );
                if text.is_empty() {
                    tracing::warn!(%video_id, "Transcript lookup returned no caption text");
                    Ok(None)
                } else {
                    Ok(Some(text))
                }
            }
            Err(e) => {
                // the library errors when captions are disabled or the
                // video does not exist; both mean "no transcript here"
                tracing::warn!(%video_id, error = %e, "Failed to fetch caption transcript");
                Ok(None)
            }
        }
    }
}

/// Joins caption snippet texts with single spaces, skipping empty snippets.
pub(crate) fn join_caption_texts<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    texts
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_caption_texts_with_spaces() {
        let snippets = ["hello", "world", "again"];
        assert_eq!(
            join_caption_texts(snippets.iter().copied()),
            "hello world again"
        );
    }

    #[test]
    fn test_join_skips_empty_and_trims() {
        let snippets = ["  hello ", "", "  ", "world"];
        assert_eq!(join_caption_texts(snippets.iter().copied()), "hello world");
    }

    #[test]
    fn test_join_empty_input() {
        assert_eq!(join_caption_texts(std::iter::empty()), "");
    }
}
