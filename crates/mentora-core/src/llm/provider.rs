//! TutorProvider trait definition.
//!
//! The single seam between the synthesis core and the remote
//! generative-language endpoint. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition). The concrete implementation lives in
//! mentora-infra (`GeminiProvider`); tests substitute scripted
//! in-memory doubles.

use mentora_types::llm::{GenerationRequest, LlmError};

/// Trait for generative-endpoint backends.
///
/// One request in flight per conversation turn; there is no streaming
/// surface and no cancellation primitive — a call runs to completion or
/// to the provider's own timeout.
pub trait TutorProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the raw reply text.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
