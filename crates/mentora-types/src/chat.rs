//! Chat message and session types for Mentora.
//!
//! A conversation is an append-only, ordered sequence of [`ChatMessage`]
//! values exchanged between the learner and the tutor, governed by at
//! most one active [`Session`] (subject + level) at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a message in a tutoring conversation.
///
/// There is no `System` role: all instructions are embedded into the
/// single user turn sent to the generative endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a learner message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create a tutor message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The active (subject, level) pair governing the current conversation.
///
/// Replacing the session clears the message sequence; exactly one
/// session is active at a time, owned by the conversation state keeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subject: String,
    pub level: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session now for the given subject and level.
    pub fn new(subject: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            level: level.into(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("Bonjour");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "Bonjour");

        let msg = ChatMessage::assistant("Salut !");
        assert_eq!(msg.role, MessageRole::Assistant);
    }

    #[test]
    fn test_session_new() {
        let session = Session::new("mathématiques", "débutant");
        assert_eq!(session.subject, "mathématiques");
        assert_eq!(session.level, "débutant");
        assert!(session.started_at <= Utc::now());
    }
}
