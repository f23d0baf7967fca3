use serde::{Deserialize, Serialize};

use crate::{GenerateRequest, Generator};

const SYSTEM_PROMPT: &str = include_str!("./prompts/summary.txt");

pub const SUMMARY_FALLBACK: &str = "A summary could not be generated for this transcription.";

#[derive(Debug, Clone)]
pub struct SummaryInput {
    pub transcription: String,
    pub custom_instruction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
}

fn summary_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "The summary of the video."
            }
        },
        "required": ["summary"],
        "additionalProperties": false
    })
}

/// Summarizes a transcription, optionally steered by a custom
/// instruction. Falls back to a descriptive placeholder on failure.
#[tracing::instrument(skip_all)]
pub async fn generate_summary<G: Generator>(generator: &G, input: &SummaryInput) -> SummaryOutput {
    let user_content = match &input.custom_instruction {
        Some(instruction) => format!(
            "Additionally, follow this specific instruction: {instruction}\n\nTranscript:\n{}",
            input.transcription
        ),
        None => format!("Transcript:\n{}", input.transcription),
    };

    let request = GenerateRequest {
        schema_name: "video_summary",
        system_prompt: SYSTEM_PROMPT,
        user_content,
        schema: summary_schema(),
    };

    match generator.generate::<SummaryOutput>(request).await {
        Ok(output) if !output.summary.trim().is_empty() => output,
        Ok(_) => {
            tracing::warn!("Summary generation returned empty content, using fallback");
            SummaryOutput {
                summary: SUMMARY_FALLBACK.to_string(),
            }
        }
        Err(e) => {
            tracing::error!(error = ?e, "Summary generation failed, using fallback");
            SummaryOutput {
                summary: SUMMARY_FALLBACK.to_string(),
            }
        }
    }
}
