use serde::{Deserialize, Serialize};

use crate::{GenerateRequest, Generator, HighlightSegment};

const SYSTEM_PROMPT: &str = include_str!("./prompts/highlights.txt");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightsOutput {
    pub segments: Vec<HighlightSegment>,
}

fn highlights_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "segments": {
                "type": "array",
                "description": "An array of transcription segments, each with a highlight flag.",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "A segment of the transcription text."
                        },
                        "highlight": {
                            "type": "boolean",
                            "description": "Whether this segment should be highlighted."
                        }
                    },
                    "required": ["text", "highlight"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["segments"],
        "additionalProperties": false
    })
}

/// Breaks a transcription into ordered segments with highlight flags.
///
/// An empty transcription yields an empty segment list without calling
/// the model. A failed call, a missing result, or segments that do not
/// concatenate back to the transcription all fall back to the whole
/// transcription as a single non-highlighted segment.
#[tracing::instrument(skip_all)]
pub async fn highlight_transcription<G: Generator>(
    generator: &G,
    transcription: &str,
) -> HighlightsOutput {
    if transcription.trim().is_empty() {
        return HighlightsOutput {
            segments: Vec::new(),
        };
    }

    let request = GenerateRequest {
        schema_name: "transcription_highlights",
        system_prompt: SYSTEM_PROMPT,
        user_content: format!("Transcription:\n{transcription}"),
        schema: highlights_schema(),
    };

    match generator.generate::<HighlightsOutput>(request).await {
        Ok(output) if segments_cover_transcription(&output.segments, transcription) => output,
        Ok(_) => {
            tracing::warn!("Highlight segments do not cover the transcription, using fallback");
            fallback_segments(transcription)
        }
        Err(e) => {
            tracing::error!(error = ?e, "Highlight generation failed, using fallback");
            fallback_segments(transcription)
        }
    }
}

fn fallback_segments(transcription: &str) -> HighlightsOutput {
    HighlightsOutput {
        segments: vec![HighlightSegment {
            text: transcription.to_string(),
            highlight: false,
        }],
    }
}

/// Segment texts, concatenated in order, must reproduce the
/// transcription exactly.
fn segments_cover_transcription(segments: &[HighlightSegment], transcription: &str) -> bool {
    if segments.is_empty() {
        return false;
    }
    let concatenated: String = segments.iter().map(|s| s.text.as_str()).collect();
    concatenated == transcription
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, highlight: bool) -> HighlightSegment {
        HighlightSegment {
            text: text.to_string(),
            highlight,
        }
    }

    #[test]
    fn test_segments_covering_exactly() {
        let segments = vec![seg("hello ", false), seg("world", true)];
        assert!(segments_cover_transcription(&segments, "hello world"));
    }

    #[test]
    fn test_segments_with_missing_text() {
        let segments = vec![seg("hello", false)];
        assert!(!segments_cover_transcription(&segments, "hello world"));
    }

    #[test]
    fn test_segments_with_reordered_text() {
        let segments = vec![seg("world", false), seg("hello ", true)];
        assert!(!segments_cover_transcription(&segments, "hello world"));
    }

    #[test]
    fn test_empty_segments_do_not_cover() {
        assert!(!segments_cover_transcription(&[], "hello"));
    }

    #[test]
    fn test_fallback_is_single_non_highlighted_segment() {
        let output = fallback_segments("the whole text");
        assert_eq!(output.segments, vec![seg("the whole text", false)]);
    }
}
