use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use yt_source::mime_for_extension;

use crate::{AudioInput, GenerateRequest, Generator, TranscribeResponse, Transcriber};

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_transcribe_request(
        &self,
        bytes: Vec<u8>,
        file_name: String,
        mime_type: &str,
        model_name: impl Into<String>,
    ) -> Result<TranscribeResponse, OpenAIError> {
        // mime types can come straight out of a user-supplied data URI
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type)
            .inspect_err(|e| tracing::error!(error = %e, %mime_type, "Invalid mime type"))?;

        let form = reqwest::multipart::Form::new()
            .text("model", model_name.into())
            .text("response_format", "json")
            .part("file", part);

        let resp = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<TranscribeResponse>().await?)
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        system_prompt: impl Into<String>,
        user_content: impl Into<String>,
        response_format: Option<serde_json::Value>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let mut body = serde_json::json!({
            "model": model_name.into(),
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt.into()
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        if let Some(response_format) = response_format {
            body["response_format"] = response_format;
        }

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Transcriber for OpenAIClient {
    const TRANSCRIPTION_MODEL: &'static str = "whisper-1";
    type Error = OpenAIError;

    async fn transcribe(&self, audio_input: AudioInput) -> Result<TranscribeResponse, Self::Error> {
        let (bytes, file_name, mime_type) = match audio_input {
            AudioInput::DataUri(data_uri) => {
                let file_name = format!("audio.{}", data_uri.extension());
                let mime_type = data_uri.mime_type().to_string();
                (data_uri.into_bytes(), file_name, mime_type)
            }
            AudioInput::File(path) => {
                let extension = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("mp3")
                    .to_string();
                let bytes = tokio::fs::read(&path).await?;
                let mime_type = mime_for_extension(&extension).to_string();
                (bytes, format!("audio.{extension}"), mime_type)
            }
        };

        self.send_transcribe_request(bytes, file_name, &mime_type, Self::TRANSCRIPTION_MODEL)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"))
    }
}

impl Generator for OpenAIClient {
    const GENERATOR_MODEL: &'static str = "gpt-4o-mini";
    type Error = OpenAIError;

    async fn generate<T: DeserializeOwned>(
        &self,
        request: GenerateRequest,
    ) -> Result<T, Self::Error> {
        let response_format = serde_json::json!({
            "type": "json_schema",
            "json_schema": {
                "name": request.schema_name,
                "strict": true,
                "schema": request.schema,
            }
        });

        let response = self
            .send_completion_request(
                Self::GENERATOR_MODEL,
                request.system_prompt,
                request.user_content,
                Some(response_format),
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate structured output"))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| OpenAIError::Api {
                status: 0,
                message: "No content in response".into(),
            })?;

        Ok(serde_json::from_str(&content)?)
    }
}
