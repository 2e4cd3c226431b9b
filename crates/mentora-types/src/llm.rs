//! Generation request types and provider errors.
//!
//! The tutoring core builds a provider-agnostic [`GenerationRequest`]
//! (a fully assembled prompt plus fixed sampling parameters); the infra
//! layer translates it to the concrete wire format of the generative
//! endpoint.

use serde::{Deserialize, Serialize};

/// Fixed sampling parameters for tutor replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_output_tokens: 2000,
            top_p: 0.9,
            top_k: 40,
        }
    }
}

/// A complete request to the generative endpoint.
///
/// The prompt already embeds the latest message, the rendered prior
/// turns, and the trailing instructions; providers send it as a single
/// user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub params: GenerationParams,
}

/// Errors from generative-endpoint operations.
///
/// Every variant collapses to canned text at the synthesis boundary;
/// none of them propagates past it.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint returned HTTP {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("rate limited: {message}")]
    RateLimited { message: String },

    #[error("malformed response body: {0}")]
    Deserialization(String),

    #[error("response contained no candidate text")]
    EmptyCandidates,
}
