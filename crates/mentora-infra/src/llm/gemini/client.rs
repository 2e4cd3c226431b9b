//! GeminiProvider -- concrete [`TutorProvider`] implementation for the
//! Google generative-language endpoint.
//!
//! Sends non-streaming `generateContent` requests with the API key as a
//! URL query parameter and a hard per-request timeout. The key is
//! wrapped in [`secrecy::SecretString`] and only exposed while the URL
//! is built; the provider deliberately has no `Debug` impl.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use mentora_core::llm::TutorProvider;
use mentora_types::config::TutorConfig;
use mentora_types::llm::{GenerationRequest, LlmError};

use super::types::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Default hard timeout for a single endpoint call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Gemini generative-language provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider with the default 20-second timeout.
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self::with_timeout(api_key, model, DEFAULT_TIMEOUT)
    }

    /// Create a provider with an explicit request timeout.
    pub fn with_timeout(api_key: SecretString, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// Build a provider from the tutor configuration.
    ///
    /// The API key must be present (either in `config.toml` or via the
    /// `GEMINI_API_KEY` environment override applied by the loader).
    pub fn from_config(config: &TutorConfig) -> Result<Self, LlmError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Transport("no API key configured".to_string()))?;

        let mut provider = Self::with_timeout(
            SecretString::from(api_key),
            config.model.clone(),
            Duration::from_millis(config.request_timeout_ms),
        );
        provider.base_url = config.base_url.clone();
        Ok(provider)
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Endpoint URL with the model and key baked in.
    fn url(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// Map a non-success HTTP status and error body to an [`LlmError`].
    fn map_error(status: u16, body: &str) -> LlmError {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        if status == 429 || message.to_lowercase().contains("quota") {
            return LlmError::RateLimited { message };
        }
        LlmError::Endpoint { status, message }
    }
}

impl TutorProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let body = GenerateContentRequest::from_request(request);

        let response = self
            .client
            .post(self.url())
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status.as_u16(), &error_body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(e.to_string()))?;

        parsed.first_text().ok_or(LlmError::EmptyCandidates)
    }
}
