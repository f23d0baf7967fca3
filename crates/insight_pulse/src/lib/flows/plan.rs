use serde::{Deserialize, Serialize};

use crate::{GenerateRequest, Generator};

const SYSTEM_PROMPT: &str = include_str!("./prompts/plan.txt");

pub const PLAN_FALLBACK: &str =
    "An actionable plan could not be generated for this transcription.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutput {
    pub actionable_plan: String,
}

fn plan_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "actionablePlan": {
                "type": "string",
                "description": "A structured, actionable plan derived from the video transcription, including practical tips and a SMART goal if possible."
            }
        },
        "required": ["actionablePlan"],
        "additionalProperties": false
    })
}

/// Converts a transcription into a structured, actionable plan. Falls
/// back to a descriptive placeholder on failure.
#[tracing::instrument(skip_all)]
pub async fn build_action_plan<G: Generator>(generator: &G, transcription: &str) -> PlanOutput {
    let request = GenerateRequest {
        schema_name: "actionable_plan",
        system_prompt: SYSTEM_PROMPT,
        user_content: format!("Transcription:\n{transcription}"),
        schema: plan_schema(),
    };

    match generator.generate::<PlanOutput>(request).await {
        Ok(output) if !output.actionable_plan.trim().is_empty() => output,
        Ok(_) => {
            tracing::warn!("Plan generation returned empty content, using fallback");
            PlanOutput {
                actionable_plan: PLAN_FALLBACK.to_string(),
            }
        }
        Err(e) => {
            tracing::error!(error = ?e, "Plan generation failed, using fallback");
            PlanOutput {
                actionable_plan: PLAN_FALLBACK.to_string(),
            }
        }
    }
}
