//! Infrastructure for Mentora: the concrete Gemini endpoint client,
//! configuration loading, and tracing initialization.

pub mod config;
pub mod llm;
pub mod telemetry;
