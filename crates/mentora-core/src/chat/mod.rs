//! Conversation state keeping.

pub mod conversation;

pub use conversation::Conversation;
