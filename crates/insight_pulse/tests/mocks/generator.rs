use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use insight_pulse::{GenerateRequest, Generator};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone)]
pub struct MockGenerator {
    pub responses: Arc<Mutex<HashMap<String, Value>>>,
    pub calls: Arc<Mutex<Vec<GenerateRequest>>>,
    pub fail_with: Option<String>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, schema_name: &str, value: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(schema_name.to_string(), value);
        self
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl Generator for MockGenerator {
    const GENERATOR_MODEL: &'static str = "mock-gpt";
    type Error = anyhow::Error;

    async fn generate<T: DeserializeOwned>(
        &self,
        request: GenerateRequest,
    ) -> Result<T, Self::Error> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let value = self
            .responses
            .lock()
            .unwrap()
            .get(request.schema_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no mock response for schema {}", request.schema_name))?;
        Ok(serde_json::from_value(value)?)
    }
}
