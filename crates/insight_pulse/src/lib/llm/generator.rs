use std::{fmt::Debug, future::Future};

use serde::de::DeserializeOwned;

/// A generative-model invocation that takes a prompt and a target JSON
/// schema and returns the structured result, or errors. Shape
/// validation happens at deserialization; the flows decide what to do
/// with a failure.
pub trait Generator {
    const GENERATOR_MODEL: &'static str;

    type Error: Debug;

    fn generate<T: DeserializeOwned>(
        &self,
        request: GenerateRequest,
    ) -> impl Future<Output = Result<T, Self::Error>>;
}

/// One prompt-templated call: a system prompt, the filled-in user
/// content, and the JSON schema the response must conform to.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub schema_name: &'static str,
    pub system_prompt: &'static str,
    pub user_content: String,
    pub schema: serde_json::Value,
}
