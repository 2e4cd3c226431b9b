//! Concrete [`TutorProvider`] implementations.
//!
//! [`TutorProvider`]: mentora_core::llm::TutorProvider

pub mod gemini;

pub use gemini::GeminiProvider;
