use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quantum_core::model::{AssistantSettings, AssistantSettingsDraft, AssistantSettingsError};

use crate::error::AssistantError;

/// Anything that can answer a single prompt.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Send one prompt and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the assistant is disabled, the request
    /// fails, or the reply is empty.
    async fn ask(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// Read assistant settings from the environment.
///
/// `QUANTUM_AI_API_KEY` falls back to `API_KEY`. Model, base URL and system
/// instruction come from `QUANTUM_AI_MODEL`, `QUANTUM_AI_BASE_URL` and
/// `QUANTUM_AI_SYSTEM_INSTRUCTION`.
///
/// # Errors
///
/// Returns `AssistantSettingsError` if the base URL is malformed.
pub fn assistant_settings_from_env() -> Result<AssistantSettings, AssistantSettingsError> {
    let api_key = env::var("QUANTUM_AI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| env::var("API_KEY").ok());
    AssistantSettingsDraft {
        api_key,
        model: env::var("QUANTUM_AI_MODEL").ok(),
        base_url: env::var("QUANTUM_AI_BASE_URL").ok(),
        system_instruction: env::var("QUANTUM_AI_SYSTEM_INSTRUCTION").ok(),
    }
    .validate()
}

/// Gemini `generateContent` client. One request per prompt, no retries.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    settings: AssistantSettings,
}

impl AssistantService {
    #[must_use]
    pub fn new(settings: AssistantSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.is_enabled()
    }

    #[must_use]
    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url(),
            self.settings.model()
        )
    }
}

#[async_trait]
impl AssistantClient for AssistantService {
    async fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = self.settings.api_key().ok_or(AssistantError::Disabled)?;

        let payload = GenerateRequest::new(self.settings.system_instruction(), prompt);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text().ok_or(AssistantError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateRequest<'a> {
    fn new(system_instruction: &'a str, prompt: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, or `None` when blank.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_generate_content_shape() {
        let body = GenerateRequest::new("be brief", "what is a photon?");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "systemInstruction": { "parts": [{ "text": "be brief" }] },
                "contents": [
                    { "role": "user", "parts": [{ "text": "what is a photon?" }] }
                ]
            })
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Фотон " }, { "text": "это квант." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Фотон это квант."));
    }

    #[test]
    fn blank_or_missing_text_is_none() {
        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_text().is_none());

        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(blank.into_text().is_none());
    }

    #[test]
    fn endpoint_uses_model_and_base_url() {
        let settings = AssistantSettingsDraft {
            api_key: Some("key".into()),
            model: Some("gemini-test".into()),
            base_url: Some("http://localhost:9999/v1beta/".into()),
            system_instruction: None,
        }
        .validate()
        .unwrap();
        let service = AssistantService::new(settings);
        assert!(service.enabled());
        assert_eq!(
            service.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_disables_requests() {
        let settings = AssistantSettingsDraft::new().validate().unwrap();
        let service = AssistantService::new(settings);
        assert!(!service.enabled());
        let err = service.ask("hello").await.unwrap_err();
        assert!(matches!(err, AssistantError::Disabled));
    }
}
