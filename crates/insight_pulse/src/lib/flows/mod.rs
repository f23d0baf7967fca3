//! The prompt-templated flows. Each derived flow pairs one prompt with
//! one target schema, and substitutes a deterministic fallback on any
//! failure instead of surfacing it to the caller.

mod action_items;
mod highlights;
mod plan;
mod summary;
mod transcribe;

pub use action_items::{extract_action_items, ActionItemsOutput};
pub use highlights::{highlight_transcription, HighlightsOutput};
pub use plan::{build_action_plan, PlanOutput, PLAN_FALLBACK};
pub use summary::{generate_summary, SummaryInput, SummaryOutput, SUMMARY_FALLBACK};
pub use transcribe::{transcribe_file, transcribe_upload, transcribe_youtube, TranscriptionOutput};
