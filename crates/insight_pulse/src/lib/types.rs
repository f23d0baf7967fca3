use serde::{Deserialize, Serialize};

/// A contiguous span of transcription text with a highlight flag.
/// Segments are ordered; their concatenation reproduces the
/// transcription they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub highlight: bool,
}

/// The full set of artifacts derived from one submission. Every derived
/// field depends only on `transcription`, never on a sibling field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInsights {
    pub transcription: String,
    pub summary: String,
    pub actionable_items: Vec<String>,
    pub actionable_plan: String,
    pub segments: Vec<HighlightSegment>,
}
