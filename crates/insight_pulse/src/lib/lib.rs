mod error;
mod flows;
mod llm;
mod processor;
pub mod tracing;
mod types;

pub use error::Error;
pub use flows::{
    build_action_plan, extract_action_items, generate_summary, highlight_transcription,
    transcribe_file, transcribe_upload, transcribe_youtube, ActionItemsOutput, HighlightsOutput,
    PlanOutput, SummaryInput, SummaryOutput, TranscriptionOutput, PLAN_FALLBACK, SUMMARY_FALLBACK,
};
pub use llm::openai;
pub use llm::{
    generator::{GenerateRequest, Generator},
    transcriber::{AudioInput, TranscribeResponse, Transcriber},
};
pub use processor::{builder::InsightsProcessorBuilder, AnalyzeOptions, InsightsProcessor};
pub use types::{HighlightSegment, VideoInsights};
