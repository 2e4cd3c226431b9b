//! Conversation core for Mentora.
//!
//! Two collaborating pieces:
//!
//! - [`chat::Conversation`] keeps the ordered message sequence, the busy
//!   flag, and the active session, and drives a synthesis turn for each
//!   learner message.
//! - [`tutor::ResponseSynthesizer`] turns a message history into reply
//!   text: cache lookup, classification, subject inference, prompt
//!   assembly, provider call, and normalization — or a canned fallback
//!   when the endpoint fails.
//!
//! Concrete providers implement [`llm::TutorProvider`] and live in
//! `mentora-infra`.

pub mod chat;
pub mod llm;
pub mod tutor;
