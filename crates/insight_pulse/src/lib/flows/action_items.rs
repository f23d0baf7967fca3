use serde::{Deserialize, Serialize};

use crate::{GenerateRequest, Generator};

const SYSTEM_PROMPT: &str = include_str!("./prompts/action_items.txt");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemsOutput {
    pub actionable_items: Vec<String>,
}

fn action_items_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "actionableItems": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of actionable items extracted from the transcription."
            }
        },
        "required": ["actionableItems"],
        "additionalProperties": false
    })
}

/// Extracts a list of actionable items from a transcription. Falls back
/// to an empty list on failure.
#[tracing::instrument(skip_all)]
pub async fn extract_action_items<G: Generator>(
    generator: &G,
    transcription: &str,
) -> ActionItemsOutput {
    let request = GenerateRequest {
        schema_name: "actionable_items",
        system_prompt: SYSTEM_PROMPT,
        user_content: format!("Transcription:\n{transcription}"),
        schema: action_items_schema(),
    };

    match generator.generate::<ActionItemsOutput>(request).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = ?e, "Action item extraction failed, using fallback");
            ActionItemsOutput {
                actionable_items: Vec::new(),
            }
        }
    }
}
