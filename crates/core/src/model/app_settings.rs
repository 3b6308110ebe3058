use thiserror::Error;
use url::Url;

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are the Quantum EC Assistant. Expert in STEM. \
Keep responses high-quality, professional, and in Russian.";

/// Validated configuration for the chat assistant.
///
/// Without an API key the assistant is disabled and every request fails
/// locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantSettings {
    api_key: Option<String>,
    model: String,
    base_url: String,
    system_instruction: String,
}

#[derive(Clone, Debug, Default)]
pub struct AssistantSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub system_instruction: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssistantSettingsError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl AssistantSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `AssistantSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AssistantSettings, AssistantSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model)
            .unwrap_or_else(|| DEFAULT_ASSISTANT_MODEL.to_string());
        let base_url = normalize_optional(self.base_url)
            .unwrap_or_else(|| DEFAULT_ASSISTANT_BASE_URL.to_string());
        let system_instruction = normalize_optional(self.system_instruction)
            .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string());

        if Url::parse(&base_url).is_err() {
            return Err(AssistantSettingsError::InvalidBaseUrl(base_url));
        }

        Ok(AssistantSettings {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            system_instruction,
        })
    }
}

impl AssistantSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            base_url: DEFAULT_ASSISTANT_BASE_URL.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
