//! Google Gemini `generateContent` provider.

mod client;
mod types;

pub use client::GeminiProvider;
