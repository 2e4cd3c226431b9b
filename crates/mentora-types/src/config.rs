//! Tutor configuration.
//!
//! The original design hard-coded the model name and API key as
//! constants; here they are externalized into a `config.toml` that the
//! infra layer loads with defaults for every missing field.

use serde::{Deserialize, Serialize};

/// Default model identifier.
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default endpoint base URL.
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Default request timeout in milliseconds.
fn default_request_timeout_ms() -> u64 {
    20_000
}

/// Configuration for the generative-endpoint client.
///
/// Deserialized from `config.toml`. The API key may also come from the
/// `GEMINI_API_KEY` environment variable, which takes precedence over
/// the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Model identifier (e.g., "gemini-2.5-flash").
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint base URL; override for proxies or tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the generative endpoint.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Hard timeout for a single request.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
